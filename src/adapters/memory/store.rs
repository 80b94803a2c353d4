//! In-memory store implementing the label and sprint ports.
//!
//! Holds labels, sprints and a minimal issue table so that counts, detail
//! views and the detach-on-complete/delete behavior can be exercised without
//! a database. Does not persist data across restarts.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, ErrorCode, IssueId, LabelId, ProjectId, SprintId, SprintStatus, Timestamp,
};
use crate::domain::label::{Label, LabelPatch};
use crate::domain::sprint::{Sprint, SprintPatch};
use crate::ports::{
    IssueAssignee, IssueColumn, IssueTypeView, LabelReader, LabelRepository, LabelSummary,
    SprintDetail, SprintIssueView, SprintReader, SprintRepository, SprintSummary,
};

/// Issue row as far as labels and sprints care about it.
#[derive(Debug, Clone)]
pub struct IssueRecord {
    pub id: IssueId,
    pub project_id: ProjectId,
    pub sprint_id: Option<SprintId>,
    pub label_ids: Vec<LabelId>,
    pub issue_key: String,
    pub title: String,
    pub priority: String,
    pub position: i32,
    pub issue_type: IssueTypeView,
    pub assignee: Option<IssueAssignee>,
    pub column: IssueColumn,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl IssueRecord {
    /// Builds a live issue in the given project with placeholder type and
    /// column.
    pub fn new(project_id: ProjectId, issue_key: impl Into<String>, position: i32) -> Self {
        let issue_key = issue_key.into();
        Self {
            id: IssueId::new(),
            project_id,
            sprint_id: None,
            label_ids: Vec::new(),
            title: format!("Issue {}", issue_key),
            issue_key,
            priority: "medium".to_string(),
            position,
            issue_type: IssueTypeView {
                id: Uuid::new_v4(),
                name: "Task".to_string(),
                icon: "check".to_string(),
                color: "#4bade8".to_string(),
            },
            assignee: None,
            column: IssueColumn {
                id: Uuid::new_v4(),
                name: "To Do".to_string(),
                category: "todo".to_string(),
            },
            deleted_at: None,
            created_at: Timestamp::now(),
        }
    }

    pub fn in_sprint(mut self, sprint_id: SprintId) -> Self {
        self.sprint_id = Some(sprint_id);
        self
    }

    pub fn with_labels(mut self, label_ids: Vec<LabelId>) -> Self {
        self.label_ids = label_ids;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Timestamp::now());
        self
    }

    fn view(&self) -> SprintIssueView {
        SprintIssueView {
            id: self.id,
            issue_key: self.issue_key.clone(),
            title: self.title.clone(),
            priority: self.priority.clone(),
            position: self.position,
            sprint_id: self.sprint_id,
            column_id: self.column.id,
            issue_type: self.issue_type.clone(),
            assignee: self.assignee.clone(),
            column: self.column.clone(),
        }
    }
}

#[derive(Default)]
struct State {
    labels: HashMap<LabelId, Label>,
    sprints: HashMap<SprintId, Sprint>,
    issues: HashMap<IssueId, IssueRecord>,
}

impl State {
    fn detach_sprint(&mut self, sprint_id: &SprintId) {
        for issue in self.issues.values_mut() {
            if issue.sprint_id.as_ref() == Some(sprint_id) {
                issue.sprint_id = None;
            }
        }
    }
}

/// In-memory implementation of every label and sprint port.
///
/// One lock guards all tables so multi-table operations (complete, delete)
/// are atomic the same way a database transaction is.
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an issue row. Test and demo setup only.
    pub async fn seed_issue(&self, issue: IssueRecord) -> IssueId {
        let id = issue.id;
        self.state.write().await.issues.insert(id, issue);
        id
    }

    /// Returns a copy of an issue row.
    pub async fn issue(&self, id: &IssueId) -> Option<IssueRecord> {
        self.state.read().await.issues.get(id).cloned()
    }

    /// Returns the ids of all issues (deleted or not) pointing at a sprint.
    pub async fn issues_in_sprint(&self, sprint_id: &SprintId) -> Vec<IssueId> {
        self.state
            .read()
            .await
            .issues
            .values()
            .filter(|i| i.sprint_id.as_ref() == Some(sprint_id))
            .map(|i| i.id)
            .collect()
    }
}

#[async_trait]
impl LabelRepository for InMemoryStore {
    async fn save(&self, label: &Label) -> Result<(), DomainError> {
        self.state
            .write()
            .await
            .labels
            .insert(*label.id(), label.clone());
        Ok(())
    }

    async fn update(&self, id: &LabelId, patch: &LabelPatch) -> Result<Label, DomainError> {
        let mut state = self.state.write().await;
        match state.labels.get_mut(id) {
            Some(stored) => {
                stored.apply(patch.clone());
                Ok(stored.clone())
            }
            None => Err(DomainError::new(
                ErrorCode::LabelNotFound,
                format!("Label not found: {}", id),
            )),
        }
    }

    async fn find_by_id(&self, id: &LabelId) -> Result<Option<Label>, DomainError> {
        Ok(self.state.read().await.labels.get(id).cloned())
    }

    async fn delete(&self, id: &LabelId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.labels.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::LabelNotFound,
                format!("Label not found: {}", id),
            ));
        }
        for issue in state.issues.values_mut() {
            issue.label_ids.retain(|l| l != id);
        }
        Ok(())
    }
}

#[async_trait]
impl LabelReader for InMemoryStore {
    async fn list_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<LabelSummary>, DomainError> {
        let state = self.state.read().await;
        let mut summaries: Vec<LabelSummary> = state
            .labels
            .values()
            .filter(|l| l.project_id() == project_id)
            .map(|label| LabelSummary {
                issue_count: state
                    .issues
                    .values()
                    .filter(|i| i.label_ids.contains(label.id()))
                    .count() as u64,
                label: label.clone(),
            })
            .collect();

        summaries.sort_by(|a, b| a.label.name().cmp(b.label.name()));
        Ok(summaries)
    }
}

#[async_trait]
impl SprintRepository for InMemoryStore {
    async fn save(&self, sprint: &Sprint) -> Result<(), DomainError> {
        self.state
            .write()
            .await
            .sprints
            .insert(*sprint.id(), sprint.clone());
        Ok(())
    }

    async fn update(&self, id: &SprintId, patch: &SprintPatch) -> Result<Sprint, DomainError> {
        let mut state = self.state.write().await;
        match state.sprints.get_mut(id) {
            Some(stored) => {
                stored.apply(patch.clone());
                Ok(stored.clone())
            }
            None => Err(DomainError::new(
                ErrorCode::SprintNotFound,
                format!("Sprint not found: {}", id),
            )),
        }
    }

    async fn find_by_id(&self, id: &SprintId) -> Result<Option<Sprint>, DomainError> {
        Ok(self.state.read().await.sprints.get(id).cloned())
    }

    async fn record_start(&self, sprint: &Sprint) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        match state.sprints.get_mut(sprint.id()) {
            Some(stored) if stored.status() == SprintStatus::Planning => {
                let at = sprint.start_date().copied().unwrap_or_else(Timestamp::now);
                Ok(stored.start(at).is_ok())
            }
            _ => Ok(false),
        }
    }

    async fn record_completion(&self, sprint: &Sprint) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        match state.sprints.get_mut(sprint.id()) {
            Some(stored) if stored.status() == SprintStatus::Active => {
                let at = sprint.completed_at().copied().unwrap_or_else(Timestamp::now);
                if stored.complete(at).is_err() {
                    return Ok(false);
                }
            }
            _ => return Ok(false),
        }
        state.detach_sprint(sprint.id());
        Ok(true)
    }

    async fn delete(&self, id: &SprintId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.sprints.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::SprintNotFound,
                format!("Sprint not found: {}", id),
            ));
        }
        state.detach_sprint(id);
        Ok(())
    }
}

#[async_trait]
impl SprintReader for InMemoryStore {
    async fn list_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<SprintSummary>, DomainError> {
        let state = self.state.read().await;
        let mut summaries: Vec<SprintSummary> = state
            .sprints
            .values()
            .filter(|s| s.project_id() == project_id)
            .map(|sprint| SprintSummary {
                issue_count: state
                    .issues
                    .values()
                    .filter(|i| i.sprint_id.as_ref() == Some(sprint.id()))
                    .count() as u64,
                sprint: sprint.clone(),
            })
            .collect();

        summaries.sort_by(|a, b| b.sprint.created_at().cmp(a.sprint.created_at()));
        Ok(summaries)
    }

    async fn get_detail(&self, id: &SprintId) -> Result<Option<SprintDetail>, DomainError> {
        let state = self.state.read().await;
        let Some(sprint) = state.sprints.get(id) else {
            return Ok(None);
        };

        let mut members: Vec<&IssueRecord> = state
            .issues
            .values()
            .filter(|i| i.sprint_id.as_ref() == Some(id) && i.deleted_at.is_none())
            .collect();
        members.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });

        Ok(Some(SprintDetail {
            sprint: sprint.clone(),
            issues: members.into_iter().map(IssueRecord::view).collect(),
        }))
    }
}
