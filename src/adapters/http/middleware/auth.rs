//! Bearer token middleware.
//!
//! Every API route requires `Authorization: Bearer <token>`. A valid token
//! puts the `AuthenticatedUser` into the request extensions; anything else
//! ends the request with 401 before the rate limiter or a handler runs.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::response::ErrorResponse;
use crate::domain::foundation::ErrorCode;
use crate::ports::TokenValidator;

/// Auth middleware state.
pub type AuthState = Arc<dyn TokenValidator>;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let Some(token) = token else {
        tracing::debug!("Request without bearer token");
        return unauthorized();
    };

    match validator.validate(token).await {
        Ok(user) => {
            tracing::debug!(user_id = %user.id, "Authenticated request");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!("Bearer token rejected: {}", e);
            unauthorized()
        }
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new(
            StatusCode::UNAUTHORIZED,
            ErrorCode::Unauthorized,
            UNAUTHORIZED_MESSAGE,
        )),
    )
        .into_response()
}
