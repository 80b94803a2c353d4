//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use kanban_planning::adapters::auth::JwtValidator;
use kanban_planning::adapters::http::{api_router, LabelAppState, RequestGuards, SprintAppState};
use kanban_planning::adapters::memory::InMemoryStore;
use kanban_planning::adapters::rate_limiter::FixedWindowRateLimiter;
use kanban_planning::config::ServerConfig;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// Full application router over one in-memory store.
pub fn app(store: Arc<InMemoryStore>) -> Router {
    app_with_throttle(store, 10_000)
}

/// Full router whose per-IP budget is `limit` requests a minute.
pub fn app_with_throttle(store: Arc<InMemoryStore>, limit: u32) -> Router {
    api_router(
        LabelAppState::new(store.clone(), store.clone()),
        SprintAppState::new(store.clone(), store),
        RequestGuards {
            tokens: Arc::new(JwtValidator::new(TEST_SECRET, None)),
            limiter: Arc::new(FixedWindowRateLimiter::new(limit, Duration::from_secs(60))),
        },
        &ServerConfig::default(),
    )
}

/// HS256 token for a fresh user, signed with `secret`, expiring `ttl_secs` from now.
pub fn token_signed_with(secret: &[u8], ttl_secs: i64) -> String {
    let claims = json!({
        "sub": Uuid::new_v4(),
        "username": "planner",
        "exp": chrono::Utc::now().timestamp() + ttl_secs,
    });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret)).unwrap()
}

pub fn bearer() -> String {
    format!("Bearer {}", token_signed_with(TEST_SECRET, 3600))
}

/// Sends an authenticated request to `/api/v1{path}` and decodes the JSON body.
pub async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_with_auth(app, method, path, body, Some(&bearer())).await
}

/// Like `send`, with an explicit `Authorization` header value (or none).
pub async fn send_with_auth(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
    authorization: Option<&str>,
) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", path));
    if let Some(value) = authorization {
        request = request.header("authorization", value);
    }
    if body.is_some() {
        request = request.header("content-type", "application/json");
    }
    let request = request
        .body(match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
