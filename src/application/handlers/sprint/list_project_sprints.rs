//! ListProjectSprintsHandler - Query handler for a project's sprints.

use std::sync::Arc;

use crate::domain::foundation::ProjectId;
use crate::domain::sprint::SprintError;
use crate::ports::{SprintReader, SprintSummary};

/// Query for all sprints of a project.
#[derive(Debug, Clone)]
pub struct ListProjectSprintsQuery {
    pub project_id: ProjectId,
}

/// Handler for listing sprints, newest first.
pub struct ListProjectSprintsHandler {
    reader: Arc<dyn SprintReader>,
}

impl ListProjectSprintsHandler {
    pub fn new(reader: Arc<dyn SprintReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListProjectSprintsQuery,
    ) -> Result<Vec<SprintSummary>, SprintError> {
        self.reader
            .list_by_project(&query.project_id)
            .await
            .map_err(|e| {
                tracing::error!(project_id = %query.project_id, "Failed to list sprints: {}", e);
                SprintError::from(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryStore, IssueRecord};
    use crate::domain::foundation::{SprintId, Timestamp};
    use crate::domain::sprint::Sprint;
    use crate::ports::SprintRepository;
    use chrono::Duration;

    fn sprint_created_at(project_id: ProjectId, name: &str, days_ago: i64) -> Sprint {
        let created = Timestamp::from_datetime(chrono::Utc::now() - Duration::days(days_ago));
        Sprint::reconstitute(
            SprintId::new(),
            project_id,
            name.to_string(),
            None,
            None,
            None,
            Default::default(),
            None,
            created,
        )
    }

    #[tokio::test]
    async fn lists_newest_first_with_counts() {
        let store = Arc::new(InMemoryStore::new());
        let project_id = ProjectId::new();
        let old = sprint_created_at(project_id, "old", 10);
        let new = sprint_created_at(project_id, "new", 1);
        SprintRepository::save(store.as_ref(), &old).await.unwrap();
        SprintRepository::save(store.as_ref(), &new).await.unwrap();
        SprintRepository::save(store.as_ref(), &sprint_created_at(ProjectId::new(), "x", 0))
            .await
            .unwrap();
        store
            .seed_issue(IssueRecord::new(project_id, "P-1", 0).in_sprint(*old.id()))
            .await;
        let handler = ListProjectSprintsHandler::new(store);

        let sprints = handler
            .handle(ListProjectSprintsQuery { project_id })
            .await
            .unwrap();

        let names: Vec<_> = sprints.iter().map(|s| s.sprint.name()).collect();
        assert_eq!(names, vec!["new", "old"]);
        assert_eq!(sprints[0].issue_count, 0);
        assert_eq!(sprints[1].issue_count, 1);
    }
}
