//! Route configuration for sprint endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    complete_sprint, create_sprint, delete_sprint, get_sprint, list_project_sprints,
    start_sprint, update_sprint, SprintAppState,
};

/// Creates the sprint router.
///
/// Routes:
/// - `GET /projects/:project_id/sprints` - List sprints, newest first
/// - `POST /projects/:project_id/sprints` - Create a sprint in planning
/// - `GET /sprints/:id` - Sprint with its issues
/// - `PATCH /sprints/:id` - Edit name, goal or dates
/// - `DELETE /sprints/:id` - Delete a sprint, detaching its issues
/// - `POST /sprints/:id/start` - planning -> active
/// - `POST /sprints/:id/complete` - active -> completed
pub fn sprint_router() -> Router<SprintAppState> {
    Router::new()
        .route(
            "/projects/:project_id/sprints",
            get(list_project_sprints).post(create_sprint),
        )
        .route(
            "/sprints/:id",
            get(get_sprint).patch(update_sprint).delete(delete_sprint),
        )
        .route("/sprints/:id/start", post(start_sprint))
        .route("/sprints/:id/complete", post(complete_sprint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryStore, IssueRecord};
    use crate::domain::foundation::{DomainError, ProjectId, SprintId};
    use crate::domain::sprint::Sprint;
    use crate::ports::{SprintDetail, SprintReader, SprintRepository, SprintSummary};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(store: Arc<InMemoryStore>) -> Router {
        sprint_router().with_state(SprintAppState::new(store.clone(), store))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if body.is_some() {
            request = request.header("content-type", "application/json");
        }
        let request = request
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn seeded_sprint(store: &InMemoryStore) -> Sprint {
        let sprint = Sprint::new(SprintId::new(), ProjectId::new(), "S1".to_string(), None, None, None);
        SprintRepository::save(store, &sprint).await.unwrap();
        sprint
    }

    // ───────────────────────────────────────────────────────────────
    // Failing reader for store errors
    // ───────────────────────────────────────────────────────────────

    struct FailingReader;

    #[async_trait]
    impl SprintReader for FailingReader {
        async fn list_by_project(
            &self,
            _project_id: &ProjectId,
        ) -> Result<Vec<SprintSummary>, DomainError> {
            Err(DomainError::database("connection refused"))
        }

        async fn get_detail(&self, _id: &SprintId) -> Result<Option<SprintDetail>, DomainError> {
            Err(DomainError::database("connection refused"))
        }
    }

    #[tokio::test]
    async fn create_returns_201_in_planning() {
        let store = Arc::new(InMemoryStore::new());

        let (status, body) = send(
            app(store),
            "POST",
            &format!("/projects/{}/sprints", ProjectId::new()),
            Some(r#"{"name": "S1", "endDate": "2025-03-14"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["status"], "planning");
        assert_eq!(body["data"]["endDate"], "2025-03-14T00:00:00Z");
        assert!(body["data"]["startDate"].is_null());
    }

    #[tokio::test]
    async fn create_with_bad_date_is_400() {
        let store = Arc::new(InMemoryStore::new());

        let (status, body) = send(
            app(store),
            "POST",
            &format!("/projects/{}/sprints", ProjectId::new()),
            Some(r#"{"name": "S1", "startDate": "soon"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn get_returns_expanded_issues() {
        let store = Arc::new(InMemoryStore::new());
        let sprint = seeded_sprint(&store).await;
        store
            .seed_issue(IssueRecord::new(*sprint.project_id(), "P-1", 0).in_sprint(*sprint.id()))
            .await;

        let (status, body) =
            send(app(store), "GET", &format!("/sprints/{}", sprint.id()), None).await;

        assert_eq!(status, StatusCode::OK);
        let issue = &body["data"]["issues"][0];
        assert_eq!(issue["issueKey"], "P-1");
        assert_eq!(issue["issueType"]["name"], "Task");
        assert_eq!(issue["column"]["category"], "todo");
        assert!(issue["assignee"].is_null());
    }

    #[tokio::test]
    async fn start_twice_is_400_with_message() {
        let store = Arc::new(InMemoryStore::new());
        let sprint = seeded_sprint(&store).await;
        let uri = format!("/sprints/{}/start", sprint.id());

        let (status, body) = send(app(store.clone()), "POST", &uri, None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["status"], "active");
        assert!(body["data"]["startDate"].is_string());

        let (status, body) = send(app(store), "POST", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Yalnizca planlama asamasindaki sprint baslatilabilir."
        );
        assert_eq!(body["code"], "INVALID_STATE_TRANSITION");
    }

    #[tokio::test]
    async fn complete_planning_sprint_is_400() {
        let store = Arc::new(InMemoryStore::new());
        let sprint = seeded_sprint(&store).await;

        let (status, body) = send(
            app(store),
            "POST",
            &format!("/sprints/{}/complete", sprint.id()),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Yalnizca aktif sprint tamamlanabilir.");
    }

    #[tokio::test]
    async fn patch_clears_goal_with_null() {
        let store = Arc::new(InMemoryStore::new());
        let sprint = Sprint::new(
            SprintId::new(),
            ProjectId::new(),
            "S1".to_string(),
            Some("Goal".to_string()),
            None,
            None,
        );
        SprintRepository::save(store.as_ref(), &sprint).await.unwrap();

        let (status, body) = send(
            app(store),
            "PATCH",
            &format!("/sprints/{}", sprint.id()),
            Some(r#"{"name": "", "goal": null}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "S1");
        assert!(body["data"]["goal"].is_null());
    }

    #[tokio::test]
    async fn unknown_sprint_is_404() {
        let store = Arc::new(InMemoryStore::new());

        let (status, body) =
            send(app(store), "GET", &format!("/sprints/{}", SprintId::new()), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Sprint bulunamadi.");
    }

    #[tokio::test]
    async fn malformed_id_short_circuits() {
        let store = Arc::new(InMemoryStore::new());

        let (status, _) = send(app(store), "POST", "/sprints/123/start", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn store_failure_is_500_without_cause() {
        let store = Arc::new(InMemoryStore::new());
        let app = sprint_router().with_state(SprintAppState::new(store, Arc::new(FailingReader)));

        let (status, body) = send(
            app,
            "GET",
            &format!("/projects/{}/sprints", ProjectId::new()),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
