//! In-memory adapters.
//!
//! Backs every label and sprint port with process-local state. Used by the
//! handler and router tests and handy for running the API without Postgres.

mod store;

pub use store::{InMemoryStore, IssueRecord};
