//! Request guards applied to every `/api/v1` route.
//!
//! - `auth` - bearer token check, 401 when missing or rejected
//! - `rate_limit` - per-IP request budget, 429 when spent

pub mod auth;
pub mod rate_limit;

pub use auth::{auth_middleware, AuthState};
pub use rate_limit::{rate_limit_middleware, RateLimiterState};
