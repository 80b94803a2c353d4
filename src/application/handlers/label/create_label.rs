//! CreateLabelHandler - Command handler for adding a label to a project.

use std::sync::Arc;

use crate::domain::foundation::{LabelId, ProjectId};
use crate::domain::label::{Label, LabelError};
use crate::ports::LabelRepository;

/// Command to create a label.
#[derive(Debug, Clone)]
pub struct CreateLabelCommand {
    pub project_id: ProjectId,
    pub name: String,
    /// Falls back to the default color when absent or empty.
    pub color: Option<String>,
}

/// Handler for creating labels.
pub struct CreateLabelHandler {
    repository: Arc<dyn LabelRepository>,
}

impl CreateLabelHandler {
    pub fn new(repository: Arc<dyn LabelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateLabelCommand) -> Result<Label, LabelError> {
        let label = Label::new(LabelId::new(), cmd.project_id, cmd.name, cmd.color);

        self.repository.save(&label).await.map_err(|e| {
            tracing::error!(project_id = %cmd.project_id, "Failed to save label: {}", e);
            LabelError::from(e)
        })?;

        tracing::info!(label_id = %label.id(), project_id = %cmd.project_id, "Label created");
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::label::DEFAULT_LABEL_COLOR;

    fn handler(store: &Arc<InMemoryStore>) -> CreateLabelHandler {
        CreateLabelHandler::new(store.clone())
    }

    #[tokio::test]
    async fn creates_label_with_given_color() {
        let store = Arc::new(InMemoryStore::new());
        let project_id = ProjectId::new();

        let label = handler(&store)
            .handle(CreateLabelCommand {
                project_id,
                name: "Bug".to_string(),
                color: Some("#ff0000".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(label.name(), "Bug");
        assert_eq!(label.color(), "#ff0000");
        assert_eq!(label.project_id(), &project_id);
        let stored = LabelRepository::find_by_id(store.as_ref(), label.id())
            .await
            .unwrap();
        assert_eq!(stored, Some(label));
    }

    #[tokio::test]
    async fn creates_label_with_default_color() {
        let store = Arc::new(InMemoryStore::new());

        let label = handler(&store)
            .handle(CreateLabelCommand {
                project_id: ProjectId::new(),
                name: "Chore".to_string(),
                color: None,
            })
            .await
            .unwrap();

        assert_eq!(label.color(), DEFAULT_LABEL_COLOR);
    }

    #[tokio::test]
    async fn duplicate_names_are_allowed() {
        let store = Arc::new(InMemoryStore::new());
        let project_id = ProjectId::new();
        let handler = handler(&store);
        let cmd = CreateLabelCommand {
            project_id,
            name: "Bug".to_string(),
            color: None,
        };

        let first = handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert_ne!(first.id(), second.id());
    }
}
