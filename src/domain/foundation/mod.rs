//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the planning domain.

mod auth;
mod errors;
mod ids;
mod patch;
mod sprint_status;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{IssueId, LabelId, ProjectId, SprintId};
pub use patch::FieldPatch;
pub use sprint_status::SprintStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
