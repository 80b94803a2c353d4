//! DeleteLabelHandler - Command handler for removing a label.

use std::sync::Arc;

use crate::domain::foundation::LabelId;
use crate::domain::label::LabelError;
use crate::ports::LabelRepository;

/// Command to delete a label.
#[derive(Debug, Clone)]
pub struct DeleteLabelCommand {
    pub label_id: LabelId,
}

/// Handler for deleting labels.
pub struct DeleteLabelHandler {
    repository: Arc<dyn LabelRepository>,
}

impl DeleteLabelHandler {
    pub fn new(repository: Arc<dyn LabelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteLabelCommand) -> Result<(), LabelError> {
        self.repository
            .find_by_id(&cmd.label_id)
            .await?
            .ok_or(LabelError::not_found(cmd.label_id))?;

        self.repository
            .delete(&cmd.label_id)
            .await
            .map_err(|e| LabelError::from_store(e, cmd.label_id))?;

        tracing::info!(label_id = %cmd.label_id, "Label deleted");
        Ok(())
    }
}
