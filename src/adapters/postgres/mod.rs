//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresLabelRepository` / `PostgresLabelReader` - Labels and their issue counts
//! - `PostgresSprintRepository` - Sprint writes and conditional lifecycle transitions
//! - `PostgresSprintReader` - Sprint lists and the expanded detail view

mod label_reader;
mod label_repository;
mod sprint_reader;
mod sprint_repository;

pub use label_reader::PostgresLabelReader;
pub use label_repository::PostgresLabelRepository;
pub use sprint_reader::PostgresSprintReader;
pub use sprint_repository::PostgresSprintRepository;

use sqlx::migrate::Migrator;
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Reads a column, mapping decode failures to `DatabaseError`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::database(format!("{}: {}", context, e))
}
