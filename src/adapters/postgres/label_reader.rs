//! PostgreSQL implementation of LabelReader.

use async_trait::async_trait;
use sqlx::PgPool;

use super::label_repository::row_to_label;
use super::{column, db_error};
use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::{LabelReader, LabelSummary};

/// PostgreSQL implementation of LabelReader.
#[derive(Clone)]
pub struct PostgresLabelReader {
    pool: PgPool,
}

impl PostgresLabelReader {
    /// Creates a new PostgresLabelReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LabelReader for PostgresLabelReader {
    async fn list_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<LabelSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT l.id, l.project_id, l.name, l.color, l.created_at,
                   (SELECT COUNT(*) FROM issue_labels il WHERE il.label_id = l.id) AS issue_count
            FROM labels l
            WHERE l.project_id = $1
            ORDER BY l.name ASC
            "#,
        )
        .bind(project_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch labels", e))?;

        rows.iter()
            .map(|row| {
                let count: i64 = column(row, "issue_count")?;
                Ok(LabelSummary {
                    label: row_to_label(row)?,
                    issue_count: count.max(0) as u64,
                })
            })
            .collect()
    }
}
