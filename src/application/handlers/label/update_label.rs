//! UpdateLabelHandler - Command handler for renaming or recoloring a label.

use std::sync::Arc;

use crate::domain::foundation::LabelId;
use crate::domain::label::{Label, LabelError, LabelPatch};
use crate::ports::LabelRepository;

/// Command to update a label.
#[derive(Debug, Clone)]
pub struct UpdateLabelCommand {
    pub label_id: LabelId,
    pub patch: LabelPatch,
}

/// Handler for updating labels.
pub struct UpdateLabelHandler {
    repository: Arc<dyn LabelRepository>,
}

impl UpdateLabelHandler {
    pub fn new(repository: Arc<dyn LabelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateLabelCommand) -> Result<Label, LabelError> {
        let label = self
            .repository
            .update(&cmd.label_id, &cmd.patch)
            .await
            .map_err(|e| LabelError::from_store(e, cmd.label_id))?;

        tracing::info!(label_id = %cmd.label_id, "Label updated");
        Ok(label)
    }
}
