//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx-backed label and sprint stores
//! - `memory` - In-process store for tests and local runs
//! - `http` - axum routers exposing the application handlers
//! - `auth` - JWT validation for bearer tokens
//! - `rate_limiter` - in-process request budgets

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod rate_limiter;

pub use memory::InMemoryStore;
