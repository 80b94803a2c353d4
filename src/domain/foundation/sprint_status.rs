//! SprintStatus enum for tracking the lifecycle of a sprint.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{StateMachine, ValidationError};

/// Lifecycle status of a sprint.
///
/// `Planning -> Active -> Completed`, never backwards and never skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SprintStatus {
    #[default]
    Planning,
    Active,
    Completed,
}

impl SprintStatus {
    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SprintStatus::Planning => "planning",
            SprintStatus::Active => "active",
            SprintStatus::Completed => "completed",
        }
    }

    /// Parses the storage representation.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "planning" => Ok(SprintStatus::Planning),
            "active" => Ok(SprintStatus::Active),
            "completed" => Ok(SprintStatus::Completed),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown sprint status '{}'", other),
            )),
        }
    }
}

impl StateMachine for SprintStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SprintStatus::*;
        matches!((self, target), (Planning, Active) | (Active, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SprintStatus::*;
        match self {
            Planning => vec![Active],
            Active => vec![Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SprintStatus; 3] = [
        SprintStatus::Planning,
        SprintStatus::Active,
        SprintStatus::Completed,
    ];

    #[test]
    fn default_is_planning() {
        assert_eq!(SprintStatus::default(), SprintStatus::Planning);
    }

    #[test]
    fn only_forward_single_step_transitions_are_allowed() {
        for from in ALL {
            for to in ALL {
                let expected = matches!(
                    (from, to),
                    (SprintStatus::Planning, SprintStatus::Active)
                        | (SprintStatus::Active, SprintStatus::Completed)
                );
                assert_eq!(
                    from.can_transition_to(&to),
                    expected,
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn completed_is_terminal() {
        assert!(SprintStatus::Completed.is_terminal());
        assert!(!SprintStatus::Planning.is_terminal());
        assert!(!SprintStatus::Active.is_terminal());
    }

    #[test]
    fn storage_strings_parse_back() {
        for status in ALL {
            assert_eq!(SprintStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(SprintStatus::parse("archived").is_err());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SprintStatus::Planning).unwrap(),
            "\"planning\""
        );
        let status: SprintStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, SprintStatus::Completed);
    }
}
