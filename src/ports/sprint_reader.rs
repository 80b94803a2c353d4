//! Sprint reader port (read side).
//!
//! Defines the contract for sprint queries: per-project lists with issue
//! counts and the expanded detail view used by the sprint board.

use crate::domain::foundation::{DomainError, IssueId, ProjectId, SprintId};
use crate::domain::sprint::Sprint;
use async_trait::async_trait;
use uuid::Uuid;

/// Reader port for sprint queries.
#[async_trait]
pub trait SprintReader: Send + Sync {
    /// List all sprints of a project.
    ///
    /// Returns sprints ordered by created_at descending (newest first).
    async fn list_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<SprintSummary>, DomainError>;

    /// Get a sprint with its non-deleted issues expanded.
    ///
    /// Issues are ordered by position, then created_at. Returns `None` if
    /// the sprint doesn't exist.
    async fn get_detail(&self, id: &SprintId) -> Result<Option<SprintDetail>, DomainError>;
}

/// Sprint with the number of issues pointing at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintSummary {
    pub sprint: Sprint,

    /// Issues referencing the sprint, soft-deleted ones included.
    pub issue_count: u64,
}

/// Sprint plus its member issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintDetail {
    pub sprint: Sprint,
    pub issues: Vec<SprintIssueView>,
}

/// Issue as shown inside a sprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintIssueView {
    pub id: IssueId,
    pub issue_key: String,
    pub title: String,
    pub priority: String,
    pub position: i32,
    pub sprint_id: Option<SprintId>,
    pub column_id: Uuid,
    pub issue_type: IssueTypeView,
    pub assignee: Option<IssueAssignee>,
    pub column: IssueColumn,
}

/// Issue type summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTypeView {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Public profile of the assignee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueAssignee {
    pub id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

/// Board column an issue currently sits in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueColumn {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}
