//! Top-level HTTP router.
//!
//! Mounts the label and sprint routers under `/api/v1`, adds `/health`, and
//! wraps everything in the shared tower-http middleware stack. API routes
//! also sit behind the bearer token check and the per-IP throttle; the
//! token check runs first, so rejected requests spend no budget.

use axum::extract::{MatchedPath, Request};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde_json::{json, Value};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::label::{label_router, LabelAppState};
use super::middleware::{auth_middleware, rate_limit_middleware, AuthState, RateLimiterState};
use super::sprint::{sprint_router, SprintAppState};

/// Prefix shared by every API route.
pub const API_PREFIX: &str = "/api/v1";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Guards every API route passes through.
#[derive(Clone)]
pub struct RequestGuards {
    pub tokens: AuthState,
    pub limiter: RateLimiterState,
}

/// Builds the full application router.
pub fn api_router(
    labels: LabelAppState,
    sprints: SprintAppState,
    guards: RequestGuards,
    server: &ServerConfig,
) -> Router {
    let api = Router::new()
        .merge(label_router().with_state(labels))
        .merge(sprint_router().with_state(sprints))
        .layer(middleware::from_fn_with_state(
            guards.limiter,
            rate_limit_middleware,
        ))
        .layer(middleware::from_fn_with_state(guards.tokens, auth_middleware));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/health", get(health))
        .nest(API_PREFIX, api)
        .layer(cors_layer(server))
        .layer((
            SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid),
            TraceLayer::new_for_http().make_span_with(|req: &Request| {
                let method = req.method();
                let uri = req.uri();
                let matched_path = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|matched_path| matched_path.as_str());
                let request_id = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok());

                tracing::info_span!("request", %method, %uri, matched_path, request_id)
            }),
            PropagateRequestIdLayer::new(request_id),
            CompressionLayer::new(),
            TimeoutLayer::new(server.request_timeout()),
        ))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter(|origin| {
            // Credentialed CORS cannot answer with a wildcard origin.
            if origin == "*" {
                tracing::warn!("Ignoring wildcard CORS origin; list origins explicitly");
            }
            origin != "*"
        })
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ORIGIN, ACCEPT, CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .allow_origin(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::adapters::rate_limiter::FixedWindowRateLimiter;
    use crate::domain::foundation::{AuthError, AuthenticatedUser, ProjectId};
    use crate::ports::TokenValidator;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::StatusCode;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;
    use uuid::Uuid;

    const TOKEN: &str = "Bearer letmein";

    struct SingleToken;

    #[async_trait]
    impl TokenValidator for SingleToken {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            if token == "letmein" {
                Ok(AuthenticatedUser::new(Uuid::new_v4(), None))
            } else {
                Err(AuthError::InvalidToken)
            }
        }
    }

    fn app_with_limit(limit: u32) -> Router {
        let store = Arc::new(InMemoryStore::new());
        api_router(
            LabelAppState::new(store.clone(), store.clone()),
            SprintAppState::new(store.clone(), store),
            RequestGuards {
                tokens: Arc::new(SingleToken),
                limiter: Arc::new(FixedWindowRateLimiter::new(limit, Duration::from_secs(60))),
            },
            &ServerConfig::default(),
        )
    }

    fn app() -> Router {
        app_with_limit(120)
    }

    fn sprints_uri() -> String {
        format!("{}/projects/{}/sprints", API_PREFIX, ProjectId::new())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn routes_are_mounted_under_api_prefix() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(sprints_uri())
                    .header(AUTHORIZATION, TOKEN)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert!(response.headers().contains_key("x-ratelimit-remaining"));
    }

    #[tokio::test]
    async fn api_routes_require_bearer_token() {
        let response = app()
            .oneshot(Request::builder().uri(sprints_uri()).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn unauthenticated_requests_spend_no_budget() {
        let app = app_with_limit(1);

        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(sprints_uri()).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        let authed = || {
            Request::builder()
                .uri(sprints_uri())
                .header(AUTHORIZATION, TOKEN)
                .body(Body::empty())
                .unwrap()
        };
        let first = app.clone().oneshot(authed()).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let second = app.oneshot(authed()).await.unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn health_needs_no_token() {
        let app = app_with_limit(1);
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn unprefixed_routes_are_not_found() {
        let uri = format!("/projects/{}/labels", ProjectId::new());

        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_preflight_allows_configured_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(format!("{}/labels/x", API_PREFIX))
            .header(ORIGIN, "http://localhost:5173")
            .header("access-control-request-method", "PATCH")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:5173")
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-credentials")
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }
}
