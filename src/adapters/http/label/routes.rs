//! Route configuration for label endpoints.

use axum::routing::{get, patch};
use axum::Router;

use super::handlers::{create_label, delete_label, list_project_labels, update_label, LabelAppState};

/// Creates the label router.
///
/// Routes:
/// - `GET /projects/:project_id/labels` - List labels with issue counts
/// - `POST /projects/:project_id/labels` - Create a label
/// - `PATCH /labels/:id` - Rename or recolor a label
/// - `DELETE /labels/:id` - Delete a label
pub fn label_router() -> Router<LabelAppState> {
    Router::new()
        .route(
            "/projects/:project_id/labels",
            get(list_project_labels).post(create_label),
        )
        .route("/labels/:id", patch(update_label).delete(delete_label))
}
