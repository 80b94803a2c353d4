//! Runtime settings.
//!
//! Everything comes from the process environment (plus an optional `.env`),
//! keyed as `KANBAN__<SECTION>__<FIELD>`, e.g. `KANBAN__DATABASE__URL` or
//! `KANBAN__AUTH__JWT_SECRET`.
//!
//! ```no_run
//! use kanban_planning::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("binding {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::{AuthConfig, ThrottleConfig};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// All settings for one server process.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub database: DatabaseConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub throttle: ThrottleConfig,
}

impl AppConfig {
    /// Reads `.env` when present, then the `KANBAN__*` variables.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a required key is missing or a value
    /// has the wrong type. Range checks happen in [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("KANBAN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.throttle.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
