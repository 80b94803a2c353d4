//! Label command and query handlers.

// Command handlers
mod create_label;
mod delete_label;
mod update_label;

// Query handlers
mod list_project_labels;

pub use create_label::{CreateLabelCommand, CreateLabelHandler};
pub use delete_label::{DeleteLabelCommand, DeleteLabelHandler};
pub use list_project_labels::{ListProjectLabelsHandler, ListProjectLabelsQuery};
pub use update_label::{UpdateLabelCommand, UpdateLabelHandler};
