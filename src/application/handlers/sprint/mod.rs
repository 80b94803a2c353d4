//! Sprint command and query handlers.
//!
//! Handlers for sprint lifecycle operations and queries.

// Command handlers
mod complete_sprint;
mod create_sprint;
mod delete_sprint;
mod start_sprint;
mod update_sprint;

// Query handlers
mod get_sprint;
mod list_project_sprints;

pub use complete_sprint::{CompleteSprintCommand, CompleteSprintHandler};
pub use create_sprint::{CreateSprintCommand, CreateSprintHandler};
pub use delete_sprint::{DeleteSprintCommand, DeleteSprintHandler};
pub use get_sprint::{GetSprintHandler, GetSprintQuery};
pub use list_project_sprints::{ListProjectSprintsHandler, ListProjectSprintsQuery};
pub use start_sprint::{StartSprintCommand, StartSprintHandler};
pub use update_sprint::{UpdateSprintCommand, UpdateSprintHandler};
