//! CreateSprintHandler - Command handler for planning a new sprint.

use std::sync::Arc;

use crate::domain::foundation::{ProjectId, SprintId, Timestamp};
use crate::domain::sprint::{Sprint, SprintError};
use crate::ports::SprintRepository;

/// Command to create a sprint.
#[derive(Debug, Clone)]
pub struct CreateSprintCommand {
    pub project_id: ProjectId,
    pub name: String,
    pub goal: Option<String>,
    /// Raw client date strings, parsed by the handler.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Handler for creating sprints. New sprints start in planning.
pub struct CreateSprintHandler {
    repository: Arc<dyn SprintRepository>,
}

impl CreateSprintHandler {
    pub fn new(repository: Arc<dyn SprintRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateSprintCommand) -> Result<Sprint, SprintError> {
        let start_date = parse_optional_date("startDate", cmd.start_date)?;
        let end_date = parse_optional_date("endDate", cmd.end_date)?;

        let sprint = Sprint::new(
            SprintId::new(),
            cmd.project_id,
            cmd.name,
            cmd.goal,
            start_date,
            end_date,
        );

        self.repository.save(&sprint).await.map_err(|e| {
            tracing::error!(project_id = %cmd.project_id, "Failed to save sprint: {}", e);
            SprintError::from(e)
        })?;

        tracing::info!(sprint_id = %sprint.id(), project_id = %cmd.project_id, "Sprint created");
        Ok(sprint)
    }
}

// An empty string counts as "not provided".
fn parse_optional_date(
    field: &str,
    raw: Option<String>,
) -> Result<Option<Timestamp>, SprintError> {
    match raw.filter(|s| !s.is_empty()) {
        Some(s) => Ok(Some(Timestamp::parse_lenient(field, &s)?)),
        None => Ok(None),
    }
}
