//! Sprint domain module.
//!
//! Handles sprint lifecycle: creation in planning, activation, completion,
//! and hard deletion from any state.

mod aggregate;
mod errors;

pub use aggregate::{Sprint, SprintPatch};
pub use errors::{
    SprintError, ONLY_ACTIVE_CAN_COMPLETE, ONLY_PLANNING_CAN_START, SPRINT_NOT_FOUND_MESSAGE,
};
