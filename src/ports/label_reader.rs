//! Label reader port (read side).
//!
//! List views carry the number of issues tagged with each label.

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::label::Label;
use async_trait::async_trait;

/// Reader port for label queries.
#[async_trait]
pub trait LabelReader: Send + Sync {
    /// List all labels of a project.
    ///
    /// Returns labels ordered by name ascending. An unknown project yields
    /// an empty list.
    async fn list_by_project(&self, project_id: &ProjectId)
        -> Result<Vec<LabelSummary>, DomainError>;
}

/// Label with its issue association count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSummary {
    pub label: Label,

    /// Number of issues tagged with this label, soft-deleted ones included.
    pub issue_count: u64,
}
