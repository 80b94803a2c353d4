//! Sprint aggregate.
//!
//! A sprint is a time-boxed iteration inside a project. Issues point at a
//! sprint (the sprint never owns them), so detaching issues on completion or
//! deletion is a store concern coordinated by the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    FieldPatch, ProjectId, SprintId, SprintStatus, StateMachine, Timestamp, ValidationError,
};

use super::errors::{SprintError, ONLY_ACTIVE_CAN_COMPLETE, ONLY_PLANNING_CAN_START};

/// Sprint aggregate.
///
/// # Invariants
///
/// - Created in `Planning`
/// - Status only moves `Planning -> Active -> Completed`
/// - `start_date` is stamped on activation, `completed_at` on completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    id: SprintId,
    project_id: ProjectId,
    name: String,
    goal: Option<String>,
    start_date: Option<Timestamp>,
    end_date: Option<Timestamp>,
    status: SprintStatus,
    completed_at: Option<Timestamp>,
    created_at: Timestamp,
}

/// Partial update for a sprint.
///
/// `name` is only applied when non-empty. The other fields distinguish
/// "leave alone" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SprintPatch {
    pub name: Option<String>,
    pub goal: FieldPatch<String>,
    pub start_date: FieldPatch<Timestamp>,
    pub end_date: FieldPatch<Timestamp>,
}

impl SprintPatch {
    /// Builds a patch from raw client strings, parsing dates.
    ///
    /// A date sent as `null` or `""` clears the stored date.
    pub fn from_raw(
        name: Option<String>,
        goal: FieldPatch<String>,
        start_date: FieldPatch<String>,
        end_date: FieldPatch<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name,
            goal,
            start_date: parse_date_patch("startDate", start_date)?,
            end_date: parse_date_patch("endDate", end_date)?,
        })
    }

    /// The new name, if the patch carries a non-empty one.
    pub fn effective_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

fn parse_date_patch(
    field: &str,
    raw: FieldPatch<String>,
) -> Result<FieldPatch<Timestamp>, ValidationError> {
    match raw {
        FieldPatch::Unchanged => Ok(FieldPatch::Unchanged),
        FieldPatch::Clear => Ok(FieldPatch::Clear),
        FieldPatch::Set(s) if s.is_empty() => Ok(FieldPatch::Clear),
        FieldPatch::Set(s) => Timestamp::parse_lenient(field, &s).map(FieldPatch::Set),
    }
}

fn apply_optional<T>(slot: &mut Option<T>, patch: FieldPatch<T>) {
    match patch {
        FieldPatch::Unchanged => {}
        FieldPatch::Clear => *slot = None,
        FieldPatch::Set(value) => *slot = Some(value),
    }
}

impl Sprint {
    /// Create a new sprint in `Planning`.
    pub fn new(
        id: SprintId,
        project_id: ProjectId,
        name: String,
        goal: Option<String>,
        start_date: Option<Timestamp>,
        end_date: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            project_id,
            name,
            goal,
            start_date,
            end_date,
            status: SprintStatus::Planning,
            completed_at: None,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a sprint from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SprintId,
        project_id: ProjectId,
        name: String,
        goal: Option<String>,
        start_date: Option<Timestamp>,
        end_date: Option<Timestamp>,
        status: SprintStatus,
        completed_at: Option<Timestamp>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            project_id,
            name,
            goal,
            start_date,
            end_date,
            status,
            completed_at,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SprintId {
        &self.id
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn goal(&self) -> Option<&str> {
        self.goal.as_deref()
    }

    pub fn start_date(&self) -> Option<&Timestamp> {
        self.start_date.as_ref()
    }

    pub fn end_date(&self) -> Option<&Timestamp> {
        self.end_date.as_ref()
    }

    pub fn status(&self) -> SprintStatus {
        self.status
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies the editable fields present in `patch`. Status is not editable.
    pub fn apply(&mut self, patch: SprintPatch) {
        if let Some(name) = patch.effective_name() {
            self.name = name.to_string();
        }
        apply_optional(&mut self.goal, patch.goal);
        apply_optional(&mut self.start_date, patch.start_date);
        apply_optional(&mut self.end_date, patch.end_date);
    }

    /// Moves `Planning -> Active` and stamps `start_date`.
    ///
    /// # Errors
    ///
    /// - `InvalidState` unless the sprint is in `Planning`
    pub fn start(&mut self, at: Timestamp) -> Result<(), SprintError> {
        self.status = self
            .status
            .transition_to(SprintStatus::Active)
            .map_err(|_| SprintError::invalid_state(ONLY_PLANNING_CAN_START))?;
        self.start_date = Some(at);
        Ok(())
    }

    /// Moves `Active -> Completed` and stamps `completed_at`.
    ///
    /// # Errors
    ///
    /// - `InvalidState` unless the sprint is `Active`
    pub fn complete(&mut self, at: Timestamp) -> Result<(), SprintError> {
        self.status = self
            .status
            .transition_to(SprintStatus::Completed)
            .map_err(|_| SprintError::invalid_state(ONLY_ACTIVE_CAN_COMPLETE))?;
        self.completed_at = Some(at);
        Ok(())
    }
}
