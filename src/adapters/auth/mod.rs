//! Token validation adapters.

mod jwt;

pub use jwt::JwtValidator;
