//! PostgreSQL implementation of SprintRepository.
//!
//! Lifecycle transitions are conditional updates on the stored status, and
//! completion/deletion detach member issues in the same transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::{column, db_error};
use crate::domain::foundation::{
    DomainError, ErrorCode, ProjectId, SprintId, SprintStatus, Timestamp,
};
use crate::domain::sprint::{Sprint, SprintPatch};
use crate::ports::SprintRepository;

/// PostgreSQL implementation of SprintRepository.
#[derive(Clone)]
pub struct PostgresSprintRepository {
    pool: PgPool,
}

impl PostgresSprintRepository {
    /// Creates a new PostgresSprintRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn detach_issues(
    tx: &mut Transaction<'_, Postgres>,
    id: &SprintId,
) -> Result<u64, DomainError> {
    let result = sqlx::query("UPDATE issues SET sprint_id = NULL WHERE sprint_id = $1")
        .bind(id.as_uuid())
        .execute(&mut **tx)
        .await
        .map_err(|e| db_error("Failed to detach issues", e))?;

    Ok(result.rows_affected())
}

#[async_trait]
impl SprintRepository for PostgresSprintRepository {
    async fn save(&self, sprint: &Sprint) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sprints (
                id, project_id, name, goal, start_date, end_date, status,
                completed_at, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(sprint.id().as_uuid())
        .bind(sprint.project_id().as_uuid())
        .bind(sprint.name())
        .bind(sprint.goal())
        .bind(sprint.start_date().map(|t| *t.as_datetime()))
        .bind(sprint.end_date().map(|t| *t.as_datetime()))
        .bind(sprint.status().as_str())
        .bind(sprint.completed_at().map(|t| *t.as_datetime()))
        .bind(sprint.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert sprint", e))?;

        Ok(())
    }

    async fn update(&self, id: &SprintId, patch: &SprintPatch) -> Result<Sprint, DomainError> {
        // Each nullable column pairs a "touch" flag with its new value so
        // untouched columns keep the row's current contents.
        let (set_goal, goal) = patch.goal.as_write();
        let (set_start, start_date) = patch.start_date.as_write();
        let (set_end, end_date) = patch.end_date.as_write();

        let row = sqlx::query(
            r#"
            UPDATE sprints SET
                name = COALESCE($2, name),
                goal = CASE WHEN $3 THEN $4 ELSE goal END,
                start_date = CASE WHEN $5 THEN $6 ELSE start_date END,
                end_date = CASE WHEN $7 THEN $8 ELSE end_date END
            WHERE id = $1
            RETURNING id, project_id, name, goal, start_date, end_date, status,
                      completed_at, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(patch.effective_name())
        .bind(set_goal)
        .bind(goal.map(String::as_str))
        .bind(set_start)
        .bind(start_date.map(|t| *t.as_datetime()))
        .bind(set_end)
        .bind(end_date.map(|t| *t.as_datetime()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update sprint", e))?;

        match row {
            Some(row) => row_to_sprint(&row),
            None => Err(DomainError::new(
                ErrorCode::SprintNotFound,
                format!("Sprint not found: {}", id),
            )),
        }
    }

    async fn find_by_id(&self, id: &SprintId) -> Result<Option<Sprint>, DomainError> {
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

        row.as_ref().map(row_to_sprint).transpose()
    }

    async fn record_start(&self, sprint: &Sprint) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE sprints SET status = $2, start_date = $3
            WHERE id = $1 AND status = $4
            "#,
        )
        .bind(sprint.id().as_uuid())
        .bind(SprintStatus::Active.as_str())
        .bind(sprint.start_date().map(|t| *t.as_datetime()))
        .bind(SprintStatus::Planning.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to start sprint", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn record_completion(&self, sprint: &Sprint) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let result = sqlx::query(
            r#"
            UPDATE sprints SET status = $2, completed_at = $3
            WHERE id = $1 AND status = $4
            "#,
        )
        .bind(sprint.id().as_uuid())
        .bind(SprintStatus::Completed.as_str())
        .bind(sprint.completed_at().map(|t| *t.as_datetime()))
        .bind(SprintStatus::Active.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to complete sprint", e))?;

        if result.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| db_error("Failed to roll back transaction", e))?;
            return Ok(false);
        }

        detach_issues(&mut tx, sprint.id()).await?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit transaction", e))?;

        Ok(true)
    }

    async fn delete(&self, id: &SprintId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        detach_issues(&mut tx, id).await?;

        let result = sqlx::query("DELETE FROM sprints WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete sprint", e))?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(DomainError::new(
                ErrorCode::SprintNotFound,
                format!("Sprint not found: {}", id),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit transaction", e))?;

        Ok(())
    }
}

pub(super) fn row_to_sprint(row: &PgRow) -> Result<Sprint, DomainError> {
    let id: Uuid = column(row, "id")?;
    let project_id: Uuid = column(row, "project_id")?;
    let start_date: Option<DateTime<Utc>> = column(row, "start_date")?;
    let end_date: Option<DateTime<Utc>> = column(row, "end_date")?;
    let status: String = column(row, "status")?;
    let completed_at: Option<DateTime<Utc>> = column(row, "completed_at")?;
    let created_at: DateTime<Utc> = column(row, "created_at")?;

    let status = status_from_column(&status)?;

    Ok(Sprint::reconstitute(
        SprintId::from_uuid(id),
        ProjectId::from_uuid(project_id),
        column(row, "name")?,
        column(row, "goal")?,
        start_date.map(Timestamp::from_datetime),
        end_date.map(Timestamp::from_datetime),
        status,
        completed_at.map(Timestamp::from_datetime),
        Timestamp::from_datetime(created_at),
    ))
}

fn status_from_column(raw: &str) -> Result<SprintStatus, DomainError> {
    SprintStatus::parse(raw).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid sprint status: {}", e))
    })
}
