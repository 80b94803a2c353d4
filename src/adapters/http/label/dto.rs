//! Data Transfer Objects for label endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::response::IssueCount;
use crate::domain::foundation::{LabelId, ProjectId, Timestamp};
use crate::domain::label::{Label, LabelPatch};
use crate::ports::LabelSummary;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a label.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLabelRequest {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Request to update a label. Absent or `null` fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLabelRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl From<UpdateLabelRequest> for LabelPatch {
    fn from(req: UpdateLabelRequest) -> Self {
        LabelPatch {
            name: req.name,
            color: req.color,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A label as returned by create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelResponse {
    pub id: LabelId,
    pub project_id: ProjectId,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
}

impl From<&Label> for LabelResponse {
    fn from(label: &Label) -> Self {
        Self {
            id: *label.id(),
            project_id: *label.project_id(),
            name: label.name().to_string(),
            color: label.color().to_string(),
            created_at: *label.created_at(),
        }
    }
}

/// A label in a project list, with its issue count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelListItem {
    #[serde(flatten)]
    pub label: LabelResponse,
    #[serde(rename = "_count")]
    pub count: IssueCount,
}

impl From<&LabelSummary> for LabelListItem {
    fn from(summary: &LabelSummary) -> Self {
        Self {
            label: LabelResponse::from(&summary.label),
            count: IssueCount {
                issues: summary.issue_count,
            },
        }
    }
}
