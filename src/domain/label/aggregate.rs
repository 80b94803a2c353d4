//! Label entity.
//!
//! Labels are project-scoped tags attached to issues. They have no
//! lifecycle beyond create, rename/recolor and hard delete.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LabelId, ProjectId, Timestamp};

/// Color used when a label is created without one.
pub const DEFAULT_LABEL_COLOR: &str = "#1890ff";

/// Label - a colored tag owned by exactly one project.
///
/// Names are not unique within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    id: LabelId,
    project_id: ProjectId,
    name: String,
    color: String,
    created_at: Timestamp,
}

/// Partial update for a label. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl Label {
    /// Create a new label. An absent or empty color falls back to
    /// [`DEFAULT_LABEL_COLOR`].
    pub fn new(id: LabelId, project_id: ProjectId, name: String, color: Option<String>) -> Self {
        let color = color
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_LABEL_COLOR.to_string());

        Self {
            id,
            project_id,
            name,
            color,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a label from persistence.
    pub fn reconstitute(
        id: LabelId,
        project_id: ProjectId,
        name: String,
        color: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            project_id,
            name,
            color,
            created_at,
        }
    }

    pub fn id(&self) -> &LabelId {
        &self.id
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Applies the fields present in `patch`.
    pub fn apply(&mut self, patch: LabelPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(color: Option<&str>) -> Label {
        Label::new(
            LabelId::new(),
            ProjectId::new(),
            "Bug".to_string(),
            color.map(str::to_string),
        )
    }

    #[test]
    fn new_label_without_color_uses_default() {
        assert_eq!(label(None).color(), DEFAULT_LABEL_COLOR);
    }

    #[test]
    fn new_label_with_empty_color_uses_default() {
        assert_eq!(label(Some("")).color(), "#1890ff");
    }

    #[test]
    fn new_label_keeps_given_color() {
        let label = label(Some("#ff0000"));
        assert_eq!(label.name(), "Bug");
        assert_eq!(label.color(), "#ff0000");
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut label = label(Some("#ff0000"));

        label.apply(LabelPatch {
            name: Some("Defect".to_string()),
            color: None,
        });
        assert_eq!(label.name(), "Defect");
        assert_eq!(label.color(), "#ff0000");

        label.apply(LabelPatch {
            name: None,
            color: Some("#00ff00".to_string()),
        });
        assert_eq!(label.name(), "Defect");
        assert_eq!(label.color(), "#00ff00");
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut label = label(None);
        let before = label.clone();
        label.apply(LabelPatch::default());
        assert_eq!(label, before);
    }
}
