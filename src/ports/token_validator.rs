//! Bearer token validation port.
//!
//! The HTTP auth middleware depends on this trait only, so tests can swap in
//! a validator with a known secret and production can change token issuers
//! without touching the router.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts the caller.
///
/// # Contract
///
/// - `AuthError::TokenExpired` for a correctly signed token past `exp`
/// - `AuthError::InvalidToken` for everything else that is not accepted
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// `token` is the raw JWT without the `Bearer ` prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
