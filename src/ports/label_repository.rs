//! Label repository port (write side).
//!
//! Defines the contract for persisting and retrieving Label entities.

use crate::domain::foundation::{DomainError, LabelId};
use crate::domain::label::{Label, LabelPatch};
use async_trait::async_trait;

/// Repository port for Label persistence.
#[async_trait]
pub trait LabelRepository: Send + Sync {
    /// Save a new label.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, label: &Label) -> Result<(), DomainError>;

    /// Apply `patch` to the stored label and return the result.
    ///
    /// Only the fields present in the patch are written.
    ///
    /// # Errors
    ///
    /// - `LabelNotFound` if label doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, id: &LabelId, patch: &LabelPatch) -> Result<Label, DomainError>;

    /// Find a label by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &LabelId) -> Result<Option<Label>, DomainError>;

    /// Delete a label. Issue associations go with it.
    ///
    /// # Errors
    ///
    /// - `LabelNotFound` if label doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &LabelId) -> Result<(), DomainError>;
}
