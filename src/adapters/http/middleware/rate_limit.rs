//! Per-IP request throttling.
//!
//! Admitted responses carry `x-ratelimit-limit`, `x-ratelimit-remaining`
//! and `x-ratelimit-reset` (unix seconds). A spent budget answers 429 with
//! `Retry-After`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::RETRY_AFTER;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::response::ErrorResponse;
use crate::domain::foundation::ErrorCode;
use crate::ports::{RateLimitDecision, RateLimiter};

/// Rate limiter middleware state.
pub type RateLimiterState = Arc<dyn RateLimiter>;

pub const TOO_MANY_REQUESTS_MESSAGE: &str = "ThrottlerException: Too Many Requests";

/// Key used when neither proxy headers nor the socket give an address.
const UNKNOWN_CLIENT: &str = "unknown";

pub mod headers {
    use super::HeaderName;

    pub static X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
    pub static X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
    pub static X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");
}

pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiterState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let client = extract_client_ip(request.headers(), connect_info.as_ref())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());

    match limiter.check(&client).await {
        RateLimitDecision::Allowed(status) => {
            let mut response = next.run(request).await;
            let headers = response.headers_mut();
            headers.insert(headers::X_RATELIMIT_LIMIT.clone(), HeaderValue::from(status.limit));
            headers.insert(
                headers::X_RATELIMIT_REMAINING.clone(),
                HeaderValue::from(status.remaining),
            );
            headers.insert(headers::X_RATELIMIT_RESET.clone(), HeaderValue::from(status.reset_at));
            response
        }
        RateLimitDecision::Denied {
            limit,
            retry_after_secs,
        } => {
            tracing::warn!(%client, retry_after_secs, "Request budget exhausted");
            too_many_requests(limit, retry_after_secs)
        }
    }
}

/// Client address, preferring proxy headers over the socket.
///
/// Order: first `X-Forwarded-For` entry, then `X-Real-IP`, then the peer
/// address from `ConnectInfo`.
fn extract_client_ip(
    headers: &HeaderMap,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());
    if let Some(ip) = forwarded {
        return Some(ip.to_string());
    }

    let real_ip = headers
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());
    if let Some(ip) = real_ip {
        return Some(ip.to_string());
    }

    connect_info.map(|ci| ci.0.ip().to_string())
}

fn too_many_requests(limit: u32, retry_after_secs: u64) -> Response {
    let mut response = (
        StatusCode::TOO_MANY_REQUESTS,
        Json(ErrorResponse::new(
            StatusCode::TOO_MANY_REQUESTS,
            ErrorCode::RateLimitExceeded,
            TOO_MANY_REQUESTS_MESSAGE,
        )),
    )
        .into_response();

    let headers = response.headers_mut();
    headers.insert(headers::X_RATELIMIT_LIMIT.clone(), HeaderValue::from(limit));
    headers.insert(headers::X_RATELIMIT_REMAINING.clone(), HeaderValue::from(0u32));
    headers.insert(RETRY_AFTER, HeaderValue::from(retry_after_secs));
    response
}
