//! StartSprintHandler - Command handler for activating a planned sprint.

use std::sync::Arc;

use crate::domain::foundation::{SprintId, Timestamp};
use crate::domain::sprint::{Sprint, SprintError, ONLY_PLANNING_CAN_START};
use crate::ports::SprintRepository;

/// Command to start a sprint.
#[derive(Debug, Clone)]
pub struct StartSprintCommand {
    pub sprint_id: SprintId,
}

/// Handler for starting sprints.
///
/// The guard runs twice: once on the loaded aggregate and once in the
/// store's conditional update, so a concurrent start loses cleanly.
pub struct StartSprintHandler {
    repository: Arc<dyn SprintRepository>,
}

impl StartSprintHandler {
    pub fn new(repository: Arc<dyn SprintRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: StartSprintCommand) -> Result<Sprint, SprintError> {
        let mut sprint = self
            .repository
            .find_by_id(&cmd.sprint_id)
            .await?
            .ok_or(SprintError::not_found(cmd.sprint_id))?;

        sprint.start(Timestamp::now())?;

        if !self.repository.record_start(&sprint).await? {
            tracing::warn!(sprint_id = %cmd.sprint_id, "Sprint left planning before start was recorded");
            return Err(SprintError::invalid_state(ONLY_PLANNING_CAN_START));
        }

        tracing::info!(
            sprint_id = %cmd.sprint_id,
            project_id = %sprint.project_id(),
            "Sprint started"
        );
        Ok(sprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{ProjectId, SprintStatus};

    async fn seeded() -> (Arc<InMemoryStore>, Sprint) {
        let store = Arc::new(InMemoryStore::new());
        let sprint = Sprint::new(SprintId::new(), ProjectId::new(), "S1".to_string(), None, None, None);
        SprintRepository::save(store.as_ref(), &sprint).await.unwrap();
        (store, sprint)
    }

    #[tokio::test]
    async fn starts_planning_sprint() {
        let (store, sprint) = seeded().await;
        let handler = StartSprintHandler::new(store.clone());
        let before = Timestamp::now();

        let started = handler
            .handle(StartSprintCommand {
                sprint_id: *sprint.id(),
            })
            .await
            .unwrap();

        assert_eq!(started.status(), SprintStatus::Active);
        assert!(!started.start_date().unwrap().is_before(&before));
        let stored = SprintRepository::find_by_id(store.as_ref(), sprint.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status(), SprintStatus::Active);
    }

    #[tokio::test]
    async fn second_start_is_rejected_and_keeps_start_date() {
        let (store, sprint) = seeded().await;
        let handler = StartSprintHandler::new(store.clone());
        let cmd = StartSprintCommand {
            sprint_id: *sprint.id(),
        };
        let started = handler.handle(cmd.clone()).await.unwrap();

        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err, SprintError::InvalidState(ONLY_PLANNING_CAN_START.to_string()));
        let stored = SprintRepository::find_by_id(store.as_ref(), sprint.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.start_date(), started.start_date());
    }

    #[tokio::test]
    async fn unknown_sprint_is_not_found() {
        let handler = StartSprintHandler::new(Arc::new(InMemoryStore::new()));
        let id = SprintId::new();

        let err = handler
            .handle(StartSprintCommand { sprint_id: id })
            .await
            .unwrap_err();

        assert_eq!(err, SprintError::NotFound(id));
    }

    #[tokio::test]
    async fn concurrent_starts_succeed_once() {
        let (store, sprint) = seeded().await;
        let handler = Arc::new(StartSprintHandler::new(store));
        let cmd = StartSprintCommand {
            sprint_id: *sprint.id(),
        };

        let (a, b) = tokio::join!(handler.handle(cmd.clone()), handler.handle(cmd));

        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
    }
}
