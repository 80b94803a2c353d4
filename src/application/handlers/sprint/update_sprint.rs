//! UpdateSprintHandler - Command handler for editing sprint details.
//!
//! Only name, goal and dates are editable; status moves through the
//! start/complete handlers.

use std::sync::Arc;

use crate::domain::foundation::SprintId;
use crate::domain::sprint::{Sprint, SprintError, SprintPatch};
use crate::ports::SprintRepository;

/// Command to update a sprint.
#[derive(Debug, Clone)]
pub struct UpdateSprintCommand {
    pub sprint_id: SprintId,
    pub patch: SprintPatch,
}

/// Handler for updating sprints.
pub struct UpdateSprintHandler {
    repository: Arc<dyn SprintRepository>,
}

impl UpdateSprintHandler {
    pub fn new(repository: Arc<dyn SprintRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateSprintCommand) -> Result<Sprint, SprintError> {
        let sprint = self
            .repository
            .update(&cmd.sprint_id, &cmd.patch)
            .await
            .map_err(|e| SprintError::from_store(e, cmd.sprint_id))?;

        tracing::info!(sprint_id = %cmd.sprint_id, "Sprint updated");
        Ok(sprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::sprint::{StartSprintCommand, StartSprintHandler};
    use crate::domain::foundation::{FieldPatch, ProjectId, SprintStatus, Timestamp};

    async fn seeded() -> (Arc<InMemoryStore>, Sprint) {
        let store = Arc::new(InMemoryStore::new());
        let sprint = Sprint::new(
            SprintId::new(),
            ProjectId::new(),
            "S1".to_string(),
            Some("Goal".to_string()),
            Some(Timestamp::parse_lenient("startDate", "2025-01-01").unwrap()),
            Some(Timestamp::parse_lenient("endDate", "2025-01-14").unwrap()),
        );
        SprintRepository::save(store.as_ref(), &sprint).await.unwrap();
        (store, sprint)
    }

    #[tokio::test]
    async fn clears_dates_and_keeps_name_when_empty() {
        let (store, sprint) = seeded().await;
        let handler = UpdateSprintHandler::new(store.clone());
        let patch = SprintPatch::from_raw(
            Some(String::new()),
            FieldPatch::Unchanged,
            FieldPatch::Clear,
            FieldPatch::Set(String::new()),
        )
        .unwrap();

        let updated = handler
            .handle(UpdateSprintCommand {
                sprint_id: *sprint.id(),
                patch,
            })
            .await
            .unwrap();

        assert_eq!(updated.name(), "S1");
        assert_eq!(updated.goal(), Some("Goal"));
        assert!(updated.start_date().is_none());
        assert!(updated.end_date().is_none());
        let stored = SprintRepository::find_by_id(store.as_ref(), sprint.id())
            .await
            .unwrap()
            .unwrap();
        assert!(stored.end_date().is_none());
    }

    #[tokio::test]
    async fn renames_and_sets_goal() {
        let (store, sprint) = seeded().await;
        let handler = UpdateSprintHandler::new(store);

        let updated = handler
            .handle(UpdateSprintCommand {
                sprint_id: *sprint.id(),
                patch: SprintPatch {
                    name: Some("Sprint One".to_string()),
                    goal: FieldPatch::Set("New goal".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.name(), "Sprint One");
        assert_eq!(updated.goal(), Some("New goal"));
        assert_eq!(updated.start_date(), sprint.start_date());
    }

    #[tokio::test]
    async fn edit_racing_a_start_keeps_the_activation() {
        let (store, sprint) = seeded().await;
        let stale = SprintRepository::find_by_id(store.as_ref(), sprint.id())
            .await
            .unwrap()
            .unwrap();
        StartSprintHandler::new(store.clone())
            .handle(StartSprintCommand {
                sprint_id: *sprint.id(),
            })
            .await
            .unwrap();

        let updated = UpdateSprintHandler::new(store)
            .handle(UpdateSprintCommand {
                sprint_id: *stale.id(),
                patch: SprintPatch {
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.name(), "Renamed");
        assert_eq!(updated.status(), SprintStatus::Active);
        assert!(updated.start_date().is_some());
        assert_ne!(updated.start_date(), stale.start_date());
    }

    #[tokio::test]
    async fn unknown_sprint_is_not_found() {
        let handler = UpdateSprintHandler::new(Arc::new(InMemoryStore::new()));
        let id = SprintId::new();

        let err = handler
            .handle(UpdateSprintCommand {
                sprint_id: id,
                patch: SprintPatch::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, SprintError::NotFound(id));
    }
}
