//! HTTP adapter for sprints.
//!
//! Exposes sprint CRUD plus the `start` and `complete` lifecycle actions.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SprintAppState;
pub use routes::sprint_router;
