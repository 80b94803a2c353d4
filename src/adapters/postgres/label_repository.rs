//! PostgreSQL implementation of LabelRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, db_error};
use crate::domain::foundation::{DomainError, ErrorCode, LabelId, ProjectId, Timestamp};
use crate::domain::label::{Label, LabelPatch};
use crate::ports::LabelRepository;

/// PostgreSQL implementation of LabelRepository.
#[derive(Clone)]
pub struct PostgresLabelRepository {
    pool: PgPool,
}

impl PostgresLabelRepository {
    /// Creates a new PostgresLabelRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LabelRepository for PostgresLabelRepository {
    async fn save(&self, label: &Label) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO labels (id, project_id, name, color, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(label.id().as_uuid())
        .bind(label.project_id().as_uuid())
        .bind(label.name())
        .bind(label.color())
        .bind(label.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert label", e))?;

        Ok(())
    }

    async fn update(&self, id: &LabelId, patch: &LabelPatch) -> Result<Label, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE labels SET
                name = COALESCE($2, name),
                color = COALESCE($3, color)
            WHERE id = $1
            RETURNING id, project_id, name, color, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(patch.name.as_deref())
        .bind(patch.color.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update label", e))?;

        match row {
            Some(row) => row_to_label(&row),
            None => Err(DomainError::new(
                ErrorCode::LabelNotFound,
                format!("Label not found: {}", id),
            )),
        }
    }

    async fn find_by_id(&self, id: &LabelId) -> Result<Option<Label>, DomainError> {
        let row = sqlx::query(
            "SELECT id, project_id, name, color, created_at FROM labels WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch label", e))?;

        row.as_ref().map(row_to_label).transpose()
    }

    async fn delete(&self, id: &LabelId) -> Result<(), DomainError> {
        // issue_labels rows go with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM labels WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete label", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::LabelNotFound,
                format!("Label not found: {}", id),
            ));
        }

        Ok(())
    }
}

pub(super) fn row_to_label(row: &PgRow) -> Result<Label, DomainError> {
    let id: Uuid = column(row, "id")?;
    let project_id: Uuid = column(row, "project_id")?;
    let created_at: DateTime<Utc> = column(row, "created_at")?;

    Ok(Label::reconstitute(
        LabelId::from_uuid(id),
        ProjectId::from_uuid(project_id),
        column(row, "name")?,
        column(row, "color")?,
        Timestamp::from_datetime(created_at),
    ))
}
