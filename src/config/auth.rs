//! Bearer-token and throttling settings.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// HS256 token verification settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret the issuing service signs tokens with.
    #[serde(default = "empty_secret")]
    pub jwt_secret: SecretString,

    /// Expected `iss` claim; unchecked when absent.
    #[serde(default)]
    pub jwt_issuer: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("KANBAN__AUTH__JWT_SECRET"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: empty_secret(),
            jwt_issuer: None,
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

/// Fixed-window request budget per client IP.
#[derive(Debug, Clone, Deserialize)]
pub struct ThrottleConfig {
    #[serde(default = "default_requests_per_window")]
    pub requests_per_window: u32,

    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl ThrottleConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.requests_per_window == 0 || self.window_secs == 0 {
            return Err(ValidationError::InvalidThrottle);
        }
        Ok(())
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            requests_per_window: default_requests_per_window(),
            window_secs: default_window_secs(),
        }
    }
}

fn default_requests_per_window() -> u32 {
    120
}

fn default_window_secs() -> u64 {
    60
}
