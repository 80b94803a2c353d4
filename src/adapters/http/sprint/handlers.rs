//! HTTP handlers for sprint endpoints.
//!
//! These handlers connect Axum routes to the sprint command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::response::{parse_id, ApiError, ApiResponse, DeletedResponse};
use crate::application::handlers::sprint::{
    CompleteSprintCommand, CompleteSprintHandler, CreateSprintCommand, CreateSprintHandler,
    DeleteSprintCommand, DeleteSprintHandler, GetSprintHandler, GetSprintQuery,
    ListProjectSprintsHandler, ListProjectSprintsQuery, StartSprintCommand, StartSprintHandler,
    UpdateSprintCommand, UpdateSprintHandler,
};
use crate::domain::foundation::{ProjectId, SprintId};
use crate::domain::sprint::SprintError;
use crate::ports::{SprintReader, SprintRepository};

use super::dto::{
    CreateSprintRequest, SprintDetailResponse, SprintListItem, SprintResponse,
    UpdateSprintRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Dependencies of the sprint endpoints.
#[derive(Clone)]
pub struct SprintAppState {
    pub repository: Arc<dyn SprintRepository>,
    pub reader: Arc<dyn SprintReader>,
}

impl SprintAppState {
    pub fn new(repository: Arc<dyn SprintRepository>, reader: Arc<dyn SprintReader>) -> Self {
        Self { repository, reader }
    }

    pub fn create_sprint_handler(&self) -> CreateSprintHandler {
        CreateSprintHandler::new(self.repository.clone())
    }

    pub fn update_sprint_handler(&self) -> UpdateSprintHandler {
        UpdateSprintHandler::new(self.repository.clone())
    }

    pub fn start_sprint_handler(&self) -> StartSprintHandler {
        StartSprintHandler::new(self.repository.clone())
    }

    pub fn complete_sprint_handler(&self) -> CompleteSprintHandler {
        CompleteSprintHandler::new(self.repository.clone())
    }

    pub fn delete_sprint_handler(&self) -> DeleteSprintHandler {
        DeleteSprintHandler::new(self.repository.clone())
    }

    pub fn get_sprint_handler(&self) -> GetSprintHandler {
        GetSprintHandler::new(self.reader.clone())
    }

    pub fn list_project_sprints_handler(&self) -> ListProjectSprintsHandler {
        ListProjectSprintsHandler::new(self.reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /projects/:project_id/sprints
pub async fn list_project_sprints(
    State(state): State<SprintAppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id: ProjectId = parse_id(&project_id)?;

    let sprints = state
        .list_project_sprints_handler()
        .handle(ListProjectSprintsQuery { project_id })
        .await?;

    let items: Vec<SprintListItem> = sprints.iter().map(SprintListItem::from).collect();
    Ok(ApiResponse::ok(items))
}

/// GET /sprints/:id
pub async fn get_sprint(
    State(state): State<SprintAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let sprint_id: SprintId = parse_id(&id)?;

    let detail = state
        .get_sprint_handler()
        .handle(GetSprintQuery { sprint_id })
        .await?;

    Ok(ApiResponse::ok(SprintDetailResponse::from(&detail)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /projects/:project_id/sprints
pub async fn create_sprint(
    State(state): State<SprintAppState>,
    Path(project_id): Path<String>,
    payload: Result<Json<CreateSprintRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id: ProjectId = parse_id(&project_id)?;
    let Json(request) = payload?;

    let sprint = state
        .create_sprint_handler()
        .handle(CreateSprintCommand {
            project_id,
            name: request.name,
            goal: request.goal,
            start_date: request.start_date,
            end_date: request.end_date,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(SprintResponse::from(&sprint)),
    ))
}

/// PATCH /sprints/:id
pub async fn update_sprint(
    State(state): State<SprintAppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSprintRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let sprint_id: SprintId = parse_id(&id)?;
    let Json(request) = payload?;
    let patch = request.into_patch().map_err(SprintError::from)?;

    let sprint = state
        .update_sprint_handler()
        .handle(UpdateSprintCommand { sprint_id, patch })
        .await?;

    Ok(ApiResponse::ok(SprintResponse::from(&sprint)))
}

/// POST /sprints/:id/start
///
/// Answers 201 like the other POST actions.
pub async fn start_sprint(
    State(state): State<SprintAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let sprint_id: SprintId = parse_id(&id)?;

    let sprint = state
        .start_sprint_handler()
        .handle(StartSprintCommand { sprint_id })
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(SprintResponse::from(&sprint)),
    ))
}

/// POST /sprints/:id/complete
pub async fn complete_sprint(
    State(state): State<SprintAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let sprint_id: SprintId = parse_id(&id)?;

    let sprint = state
        .complete_sprint_handler()
        .handle(CompleteSprintCommand { sprint_id })
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(SprintResponse::from(&sprint)),
    ))
}

/// DELETE /sprints/:id
pub async fn delete_sprint(
    State(state): State<SprintAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let sprint_id: SprintId = parse_id(&id)?;

    state
        .delete_sprint_handler()
        .handle(DeleteSprintCommand { sprint_id })
        .await?;

    Ok(ApiResponse::ok(DeletedResponse { deleted: true }))
}
