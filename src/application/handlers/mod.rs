//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod label;
pub mod sprint;
