//! CompleteSprintHandler - Command handler for closing an active sprint.
//!
//! Completion detaches every issue still assigned to the sprint in the same
//! unit of work as the status change.

use std::sync::Arc;

use crate::domain::foundation::{SprintId, Timestamp};
use crate::domain::sprint::{Sprint, SprintError, ONLY_ACTIVE_CAN_COMPLETE};
use crate::ports::SprintRepository;

/// Command to complete a sprint.
#[derive(Debug, Clone)]
pub struct CompleteSprintCommand {
    pub sprint_id: SprintId,
}

/// Handler for completing sprints.
pub struct CompleteSprintHandler {
    repository: Arc<dyn SprintRepository>,
}

impl CompleteSprintHandler {
    pub fn new(repository: Arc<dyn SprintRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CompleteSprintCommand) -> Result<Sprint, SprintError> {
        let mut sprint = self
            .repository
            .find_by_id(&cmd.sprint_id)
            .await?
            .ok_or(SprintError::not_found(cmd.sprint_id))?;

        sprint.complete(Timestamp::now())?;

        let recorded = self.repository.record_completion(&sprint).await.map_err(|e| {
            tracing::error!(sprint_id = %cmd.sprint_id, "Failed to complete sprint: {}", e);
            SprintError::from(e)
        })?;
        if !recorded {
            return Err(SprintError::invalid_state(ONLY_ACTIVE_CAN_COMPLETE));
        }

        tracing::info!(
            sprint_id = %cmd.sprint_id,
            project_id = %sprint.project_id(),
            "Sprint completed"
        );
        Ok(sprint)
    }
}
