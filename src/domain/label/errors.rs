//! Label-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, LabelId};

/// User-facing message for an unknown label id.
pub const LABEL_NOT_FOUND_MESSAGE: &str = "Etiket bulunamadi.";

/// Label-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// Label was not found.
    #[error("{}", LABEL_NOT_FOUND_MESSAGE)]
    NotFound(LabelId),

    /// Store failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl LabelError {
    pub fn not_found(id: LabelId) -> Self {
        LabelError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        LabelError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LabelError::NotFound(_) => ErrorCode::LabelNotFound,
            LabelError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Maps a store error raised while operating on a known label.
    pub fn from_store(err: DomainError, id: LabelId) -> Self {
        match err.code {
            ErrorCode::LabelNotFound => LabelError::NotFound(id),
            _ => LabelError::Infrastructure(err.to_string()),
        }
    }
}

impl From<DomainError> for LabelError {
    fn from(err: DomainError) -> Self {
        LabelError::Infrastructure(err.to_string())
    }
}
