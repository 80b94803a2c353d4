//! Sprint repository port (write side).
//!
//! Defines the contract for persisting and retrieving Sprint aggregates.
//!
//! # Design
//!
//! - **Conditional transitions**: `record_start` and `record_completion` only
//!   apply when the stored status still matches the expected source state,
//!   so two concurrent requests cannot both succeed
//! - **Field-level edits**: `update` writes only the fields the patch
//!   touches, so an edit racing a transition never rewinds status or
//!   activation stamps
//! - **Atomic detach**: completion and deletion clear `sprint_id` on member
//!   issues in the same unit of work as the sprint change

use crate::domain::foundation::{DomainError, SprintId};
use crate::domain::sprint::{Sprint, SprintPatch};
use async_trait::async_trait;

/// Repository port for Sprint aggregate persistence.
#[async_trait]
pub trait SprintRepository: Send + Sync {
    /// Save a new sprint.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, sprint: &Sprint) -> Result<(), DomainError>;

    /// Apply `patch` to the stored sprint and return the result.
    ///
    /// Fields the patch leaves `Unchanged` keep whatever the store holds at
    /// write time.
    ///
    /// # Errors
    ///
    /// - `SprintNotFound` if sprint doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, id: &SprintId, patch: &SprintPatch) -> Result<Sprint, DomainError>;

    /// Find a sprint by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SprintId) -> Result<Option<Sprint>, DomainError>;

    /// Persist a `planning -> active` transition.
    ///
    /// Returns `false` when the stored sprint is no longer in planning.
    async fn record_start(&self, sprint: &Sprint) -> Result<bool, DomainError>;

    /// Persist an `active -> completed` transition and detach every issue
    /// of the sprint.
    ///
    /// Returns `false` (and changes nothing) when the stored sprint is no
    /// longer active.
    async fn record_completion(&self, sprint: &Sprint) -> Result<bool, DomainError>;

    /// Detach every issue of the sprint, then delete it.
    ///
    /// # Errors
    ///
    /// - `SprintNotFound` if sprint doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &SprintId) -> Result<(), DomainError>;
}
