//! Data Transfer Objects for sprint endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::adapters::http::response::IssueCount;
use crate::domain::foundation::{
    FieldPatch, IssueId, ProjectId, SprintId, SprintStatus, Timestamp, ValidationError,
};
use crate::domain::sprint::{Sprint, SprintPatch};
use crate::ports::{SprintDetail, SprintIssueView, SprintSummary};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a sprint. Dates are ISO strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSprintRequest {
    pub name: String,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Request to update a sprint.
///
/// `goal` and the dates distinguish a missing key (unchanged) from `null`
/// (cleared).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSprintRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub goal: FieldPatch<String>,
    #[serde(default)]
    pub start_date: FieldPatch<String>,
    #[serde(default)]
    pub end_date: FieldPatch<String>,
}

impl UpdateSprintRequest {
    pub fn into_patch(self) -> Result<SprintPatch, ValidationError> {
        SprintPatch::from_raw(self.name, self.goal, self.start_date, self.end_date)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A sprint without its issues.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintResponse {
    pub id: SprintId,
    pub project_id: ProjectId,
    pub name: String,
    pub goal: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub status: SprintStatus,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<&Sprint> for SprintResponse {
    fn from(sprint: &Sprint) -> Self {
        Self {
            id: *sprint.id(),
            project_id: *sprint.project_id(),
            name: sprint.name().to_string(),
            goal: sprint.goal().map(str::to_string),
            start_date: sprint.start_date().copied(),
            end_date: sprint.end_date().copied(),
            status: sprint.status(),
            completed_at: sprint.completed_at().copied(),
            created_at: *sprint.created_at(),
        }
    }
}

/// A sprint in a project list, with its issue count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintListItem {
    #[serde(flatten)]
    pub sprint: SprintResponse,
    #[serde(rename = "_count")]
    pub count: IssueCount,
}

impl From<&SprintSummary> for SprintListItem {
    fn from(summary: &SprintSummary) -> Self {
        Self {
            sprint: SprintResponse::from(&summary.sprint),
            count: IssueCount {
                issues: summary.issue_count,
            },
        }
    }
}

/// A sprint with its live issues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintDetailResponse {
    #[serde(flatten)]
    pub sprint: SprintResponse,
    pub issues: Vec<SprintIssueResponse>,
}

impl From<&SprintDetail> for SprintDetailResponse {
    fn from(detail: &SprintDetail) -> Self {
        Self {
            sprint: SprintResponse::from(&detail.sprint),
            issues: detail.issues.iter().map(SprintIssueResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintIssueResponse {
    pub id: IssueId,
    pub issue_key: String,
    pub title: String,
    pub priority: String,
    pub position: i32,
    pub sprint_id: Option<SprintId>,
    pub column_id: Uuid,
    pub issue_type: IssueTypeResponse,
    pub assignee: Option<AssigneeResponse>,
    pub column: ColumnResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTypeResponse {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeResponse {
    pub id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}

impl From<&SprintIssueView> for SprintIssueResponse {
    fn from(issue: &SprintIssueView) -> Self {
        Self {
            id: issue.id,
            issue_key: issue.issue_key.clone(),
            title: issue.title.clone(),
            priority: issue.priority.clone(),
            position: issue.position,
            sprint_id: issue.sprint_id,
            column_id: issue.column_id,
            issue_type: IssueTypeResponse {
                id: issue.issue_type.id,
                name: issue.issue_type.name.clone(),
                icon: issue.issue_type.icon.clone(),
                color: issue.issue_type.color.clone(),
            },
            assignee: issue.assignee.as_ref().map(|a| AssigneeResponse {
                id: a.id,
                display_name: a.display_name.clone(),
                avatar_url: a.avatar_url.clone(),
            }),
            column: ColumnResponse {
                id: issue.column.id,
                name: issue.column.name.clone(),
                category: issue.column.category.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_distinguishes_missing_from_null() {
        let req: UpdateSprintRequest =
            serde_json::from_str(r#"{"goal": null, "endDate": ""}"#).unwrap();
        let patch = req.into_patch().unwrap();

        assert_eq!(patch.name, None);
        assert_eq!(patch.goal, FieldPatch::Clear);
        assert_eq!(patch.start_date, FieldPatch::Unchanged);
        assert_eq!(patch.end_date, FieldPatch::Clear);
    }

    #[test]
    fn update_request_rejects_bad_date() {
        let req: UpdateSprintRequest =
            serde_json::from_str(r#"{"startDate": "yesterday"}"#).unwrap();
        assert_eq!(req.into_patch().unwrap_err().field(), "startDate");
    }

    #[test]
    fn sprint_response_uses_camel_case_and_nulls() {
        let sprint = Sprint::new(SprintId::new(), ProjectId::new(), "S1".to_string(), None, None, None);

        let json = serde_json::to_value(SprintResponse::from(&sprint)).unwrap();

        assert_eq!(json["status"], "planning");
        assert!(json["startDate"].is_null());
        assert!(json["completedAt"].is_null());
        assert!(json.get("projectId").is_some());
    }
}
