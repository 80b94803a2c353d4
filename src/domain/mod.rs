//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `label` - Project-scoped issue tags
//! - `sprint` - Sprint aggregate and its planning/active/completed lifecycle

pub mod foundation;
pub mod label;
pub mod sprint;
