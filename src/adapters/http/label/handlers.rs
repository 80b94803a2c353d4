//! HTTP handlers for label endpoints.
//!
//! These handlers connect Axum routes to the label command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::response::{parse_id, ApiError, ApiResponse, DeletedResponse};
use crate::application::handlers::label::{
    CreateLabelCommand, CreateLabelHandler, DeleteLabelCommand, DeleteLabelHandler,
    ListProjectLabelsHandler, ListProjectLabelsQuery, UpdateLabelCommand, UpdateLabelHandler,
};
use crate::domain::foundation::{LabelId, ProjectId};
use crate::ports::{LabelReader, LabelRepository};

use super::dto::{CreateLabelRequest, LabelListItem, LabelResponse, UpdateLabelRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Dependencies of the label endpoints.
#[derive(Clone)]
pub struct LabelAppState {
    pub repository: Arc<dyn LabelRepository>,
    pub reader: Arc<dyn LabelReader>,
}

impl LabelAppState {
    pub fn new(repository: Arc<dyn LabelRepository>, reader: Arc<dyn LabelReader>) -> Self {
        Self { repository, reader }
    }

    pub fn create_label_handler(&self) -> CreateLabelHandler {
        CreateLabelHandler::new(self.repository.clone())
    }

    pub fn update_label_handler(&self) -> UpdateLabelHandler {
        UpdateLabelHandler::new(self.repository.clone())
    }

    pub fn delete_label_handler(&self) -> DeleteLabelHandler {
        DeleteLabelHandler::new(self.repository.clone())
    }

    pub fn list_project_labels_handler(&self) -> ListProjectLabelsHandler {
        ListProjectLabelsHandler::new(self.reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /projects/:project_id/labels
pub async fn list_project_labels(
    State(state): State<LabelAppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id: ProjectId = parse_id(&project_id)?;

    let labels = state
        .list_project_labels_handler()
        .handle(ListProjectLabelsQuery { project_id })
        .await?;

    let items: Vec<LabelListItem> = labels.iter().map(LabelListItem::from).collect();
    Ok(ApiResponse::ok(items))
}

/// POST /projects/:project_id/labels
pub async fn create_label(
    State(state): State<LabelAppState>,
    Path(project_id): Path<String>,
    payload: Result<Json<CreateLabelRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id: ProjectId = parse_id(&project_id)?;
    let Json(request) = payload?;

    let label = state
        .create_label_handler()
        .handle(CreateLabelCommand {
            project_id,
            name: request.name,
            color: request.color,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(LabelResponse::from(&label)),
    ))
}

/// PATCH /labels/:id
pub async fn update_label(
    State(state): State<LabelAppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateLabelRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let label_id: LabelId = parse_id(&id)?;
    let Json(request) = payload?;

    let label = state
        .update_label_handler()
        .handle(UpdateLabelCommand {
            label_id,
            patch: request.into(),
        })
        .await?;

    Ok(ApiResponse::ok(LabelResponse::from(&label)))
}

/// DELETE /labels/:id
pub async fn delete_label(
    State(state): State<LabelAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let label_id: LabelId = parse_id(&id)?;

    state
        .delete_label_handler()
        .handle(DeleteLabelCommand { label_id })
        .await?;

    Ok(ApiResponse::ok(DeletedResponse { deleted: true }))
}
