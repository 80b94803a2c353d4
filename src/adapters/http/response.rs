//! Response envelope and error translation shared by every endpoint.
//!
//! Success bodies are `{"success": true, "data": ...}`. Failures are
//! `{"success": false, "error": ..., "statusCode": ..., "code": ...}`.

use std::str::FromStr;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;
use crate::domain::label::LabelError;
use crate::domain::sprint::SprintError;

/// Message for a path segment that is not a UUID.
pub const INVALID_UUID_MESSAGE: &str = "Validation failed (uuid is expected)";

/// Success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
    pub status_code: u16,
    /// Machine-readable error code.
    pub code: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
            status_code: status.as_u16(),
            code: code.to_string(),
        }
    }
}

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

/// `_count` block on list items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCount {
    pub issues: u64,
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: ErrorCode, message: String },
    NotFound { code: ErrorCode, message: String },
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
        }
    }
}

impl From<LabelError> for ApiError {
    fn from(err: LabelError) -> Self {
        match err {
            LabelError::NotFound(_) => ApiError::NotFound {
                code: err.code(),
                message: err.to_string(),
            },
            LabelError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<SprintError> for ApiError {
    fn from(err: SprintError) -> Self {
        match err {
            SprintError::NotFound(_) => ApiError::NotFound {
                code: err.code(),
                message: err.to_string(),
            },
            SprintError::InvalidState(_) | SprintError::ValidationFailed { .. } => {
                ApiError::BadRequest {
                    code: err.code(),
                    message: err.to_string(),
                }
            }
            SprintError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest { code, message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(StatusCode::BAD_REQUEST, code, message),
            ),
            ApiError::NotFound { code, message } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(StatusCode::NOT_FOUND, code, message),
            ),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorCode::InternalError,
                        "Internal server error",
                    ),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

/// Parses a path identifier before any store access.
///
/// Only the hyphenated 36-character form is accepted. The simple, braced
/// and `urn:uuid:` spellings that `Uuid::parse_str` also takes are rejected.
pub fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    if !is_hyphenated_uuid(raw) {
        return Err(ApiError::bad_request(INVALID_UUID_MESSAGE));
    }
    raw.parse().map_err(|_| ApiError::bad_request(INVALID_UUID_MESSAGE))
}

fn is_hyphenated_uuid(raw: &str) -> bool {
    raw.len() == 36
        && raw.bytes().enumerate().all(|(i, b)| match i {
            8 | 13 | 18 | 23 => b == b'-',
            _ => b.is_ascii_hexdigit(),
        })
}
