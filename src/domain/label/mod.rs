//! Label domain module.
//!
//! Project-scoped tags for issues. The issue association itself is owned by
//! the issue side and only surfaces here as a count.

mod aggregate;
mod errors;

pub use aggregate::{Label, LabelPatch, DEFAULT_LABEL_COLOR};
pub use errors::{LabelError, LABEL_NOT_FOUND_MESSAGE};
