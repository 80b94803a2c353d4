//! Caller identity carried by a validated bearer token.
//!
//! Populated by a `TokenValidator` adapter and stored in request extensions
//! by the HTTP auth middleware.

use thiserror::Error;
use uuid::Uuid;

/// The user a request acts for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// `sub` claim, the id of the row in `users`.
    pub id: Uuid,

    /// `username` claim, when the issuer included one.
    pub username: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: Uuid, username: Option<String>) -> Self {
        Self { id, username }
    }
}

/// Why a bearer token was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Missing, malformed, wrongly signed or from the wrong issuer.
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_have_stable_messages() {
        assert_eq!(AuthError::InvalidToken.to_string(), "Invalid token");
        assert_eq!(AuthError::TokenExpired.to_string(), "Token expired");
    }
}
