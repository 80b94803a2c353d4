//! PostgreSQL implementation of SprintReader.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::sprint_repository::row_to_sprint;
use super::{column, db_error};
use crate::domain::foundation::{DomainError, IssueId, ProjectId, SprintId};
use crate::ports::{
    IssueAssignee, IssueColumn, IssueTypeView, SprintDetail, SprintIssueView, SprintReader,
    SprintSummary,
};

/// PostgreSQL implementation of SprintReader.
#[derive(Clone)]
pub struct PostgresSprintReader {
    pool: PgPool,
}

impl PostgresSprintReader {
    /// Creates a new PostgresSprintReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SprintReader for PostgresSprintReader {
    async fn list_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<SprintSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.project_id, s.name, s.goal, s.start_date, s.end_date,
                   s.status, s.completed_at, s.created_at,
                   (SELECT COUNT(*) FROM issues i WHERE i.sprint_id = s.id) AS issue_count
            FROM sprints s
            WHERE s.project_id = $1
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(project_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch sprints", e))?;

        rows.iter()
            .map(|row| {
                let count: i64 = column(row, "issue_count")?;
                Ok(SprintSummary {
                    sprint: row_to_sprint(row)?,
                    issue_count: count.max(0) as u64,
                })
            })
            .collect()
    }

    async fn get_detail(&self, id: &SprintId) -> Result<Option<SprintDetail>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, project_id, name, goal, start_date, end_date, status,
                   completed_at, created_at
            FROM sprints WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch sprint", e))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let sprint = row_to_sprint(&row)?;

        let issue_rows = sqlx::query(
            r#"
            SELECT i.id, i.issue_key, i.title, i.priority, i.position, i.sprint_id,
                   i.column_id,
                   t.id AS type_id, t.name AS type_name, t.icon AS type_icon,
                   t.color AS type_color,
                   u.id AS assignee_id, u.display_name AS assignee_display_name,
                   u.avatar_url AS assignee_avatar_url,
                   c.name AS column_name, c.category AS column_category
            FROM issues i
            JOIN issue_types t ON t.id = i.issue_type_id
            JOIN board_columns c ON c.id = i.column_id
            LEFT JOIN users u ON u.id = i.assignee_id
            WHERE i.sprint_id = $1 AND i.deleted_at IS NULL
            ORDER BY i.position ASC, i.created_at ASC
            "#,
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch sprint issues", e))?;

        let issues = issue_rows
            .iter()
            .map(row_to_issue_view)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(SprintDetail { sprint, issues }))
    }
}

fn row_to_issue_view(row: &PgRow) -> Result<SprintIssueView, DomainError> {
    let id: Uuid = column(row, "id")?;
    let sprint_id: Option<Uuid> = column(row, "sprint_id")?;
    let column_id: Uuid = column(row, "column_id")?;
    let assignee_id: Option<Uuid> = column(row, "assignee_id")?;

    let assignee = match assignee_id {
        Some(assignee_id) => Some(IssueAssignee {
            id: assignee_id,
            display_name: column(row, "assignee_display_name")?,
            avatar_url: column(row, "assignee_avatar_url")?,
        }),
        None => None,
    };

    Ok(SprintIssueView {
        id: IssueId::from_uuid(id),
        issue_key: column(row, "issue_key")?,
        title: column(row, "title")?,
        priority: column(row, "priority")?,
        position: column(row, "position")?,
        sprint_id: sprint_id.map(SprintId::from_uuid),
        column_id,
        issue_type: IssueTypeView {
            id: column(row, "type_id")?,
            name: column(row, "type_name")?,
            icon: column(row, "type_icon")?,
            color: column(row, "type_color")?,
        },
        assignee,
        column: IssueColumn {
            id: column_id,
            name: column(row, "column_name")?,
            category: column(row, "column_category")?,
        },
    })
}
