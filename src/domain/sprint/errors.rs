//! Sprint-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SprintId, ValidationError};

/// User-facing message for an unknown sprint id.
pub const SPRINT_NOT_FOUND_MESSAGE: &str = "Sprint bulunamadi.";

/// Rejection for `start` outside of planning.
pub const ONLY_PLANNING_CAN_START: &str =
    "Yalnizca planlama asamasindaki sprint baslatilabilir.";

/// Rejection for `complete` outside of active.
pub const ONLY_ACTIVE_CAN_COMPLETE: &str = "Yalnizca aktif sprint tamamlanabilir.";

/// Sprint-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SprintError {
    /// Sprint was not found.
    #[error("{}", SPRINT_NOT_FOUND_MESSAGE)]
    NotFound(SprintId),

    /// Lifecycle precondition violated.
    #[error("{0}")]
    InvalidState(String),

    /// Request field could not be interpreted.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Store failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl SprintError {
    pub fn not_found(id: SprintId) -> Self {
        SprintError::NotFound(id)
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        SprintError::InvalidState(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SprintError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SprintError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SprintError::NotFound(_) => ErrorCode::SprintNotFound,
            SprintError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            SprintError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SprintError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Maps a store error raised while operating on a known sprint.
    pub fn from_store(err: DomainError, id: SprintId) -> Self {
        match err.code {
            ErrorCode::SprintNotFound => SprintError::NotFound(id),
            _ => SprintError::Infrastructure(err.to_string()),
        }
    }
}

impl From<DomainError> for SprintError {
    fn from(err: DomainError) -> Self {
        SprintError::Infrastructure(err.to_string())
    }
}

impl From<ValidationError> for SprintError {
    fn from(err: ValidationError) -> Self {
        SprintError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
