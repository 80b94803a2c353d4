//! ListProjectLabelsHandler - Query handler for a project's labels.

use std::sync::Arc;

use crate::domain::foundation::ProjectId;
use crate::domain::label::LabelError;
use crate::ports::{LabelReader, LabelSummary};

/// Query for all labels of a project.
#[derive(Debug, Clone)]
pub struct ListProjectLabelsQuery {
    pub project_id: ProjectId,
}

/// Handler for listing labels, ordered by name.
pub struct ListProjectLabelsHandler {
    reader: Arc<dyn LabelReader>,
}

impl ListProjectLabelsHandler {
    pub fn new(reader: Arc<dyn LabelReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListProjectLabelsQuery,
    ) -> Result<Vec<LabelSummary>, LabelError> {
        self.reader
            .list_by_project(&query.project_id)
            .await
            .map_err(|e| {
                tracing::error!(project_id = %query.project_id, "Failed to list labels: {}", e);
                LabelError::from(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::LabelId;
    use crate::domain::label::Label;
    use crate::ports::LabelRepository;

    #[tokio::test]
    async fn unknown_project_yields_empty_list() {
        let handler = ListProjectLabelsHandler::new(Arc::new(InMemoryStore::new()));

        let labels = handler
            .handle(ListProjectLabelsQuery {
                project_id: ProjectId::new(),
            })
            .await
            .unwrap();

        assert!(labels.is_empty());
    }

    #[tokio::test]
    async fn lists_labels_by_name() {
        let store = Arc::new(InMemoryStore::new());
        let project_id = ProjectId::new();
        for name in ["frontend", "api", "docs"] {
            let label = Label::new(LabelId::new(), project_id, name.to_string(), None);
            LabelRepository::save(store.as_ref(), &label).await.unwrap();
        }
        let handler = ListProjectLabelsHandler::new(store);

        let labels = handler
            .handle(ListProjectLabelsQuery { project_id })
            .await
            .unwrap();

        let names: Vec<_> = labels.iter().map(|s| s.label.name()).collect();
        assert_eq!(names, vec!["api", "docs", "frontend"]);
        assert!(labels.iter().all(|s| s.issue_count == 0));
    }
}
