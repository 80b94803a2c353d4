//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::label::{
    CreateLabelCommand, CreateLabelHandler, DeleteLabelCommand, DeleteLabelHandler,
    ListProjectLabelsHandler, ListProjectLabelsQuery, UpdateLabelCommand, UpdateLabelHandler,
};
pub use handlers::sprint::{
    CompleteSprintCommand, CompleteSprintHandler, CreateSprintCommand, CreateSprintHandler,
    DeleteSprintCommand, DeleteSprintHandler, GetSprintHandler, GetSprintQuery,
    ListProjectSprintsHandler, ListProjectSprintsQuery, StartSprintCommand, StartSprintHandler,
    UpdateSprintCommand, UpdateSprintHandler,
};
