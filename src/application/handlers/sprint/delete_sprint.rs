//! DeleteSprintHandler - Command handler for removing a sprint.
//!
//! Allowed from any status. Member issues are detached, not deleted.

use std::sync::Arc;

use crate::domain::foundation::SprintId;
use crate::domain::sprint::SprintError;
use crate::ports::SprintRepository;

/// Command to delete a sprint.
#[derive(Debug, Clone)]
pub struct DeleteSprintCommand {
    pub sprint_id: SprintId,
}

/// Handler for deleting sprints.
pub struct DeleteSprintHandler {
    repository: Arc<dyn SprintRepository>,
}

impl DeleteSprintHandler {
    pub fn new(repository: Arc<dyn SprintRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSprintCommand) -> Result<(), SprintError> {
        self.repository
            .find_by_id(&cmd.sprint_id)
            .await?
            .ok_or(SprintError::not_found(cmd.sprint_id))?;

        self.repository
            .delete(&cmd.sprint_id)
            .await
            .map_err(|e| SprintError::from_store(e, cmd.sprint_id))?;

        tracing::info!(sprint_id = %cmd.sprint_id, "Sprint deleted");
        Ok(())
    }
}
