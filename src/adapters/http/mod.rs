//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! `router` assembles them behind the request guards in `middleware` and
//! the shared tower-http stack.

pub mod label;
pub mod middleware;
pub mod response;
pub mod router;
pub mod sprint;

// Re-export key types for convenience
pub use label::{label_router, LabelAppState};
pub use response::{ApiError, ApiResponse, ErrorResponse};
pub use router::{api_router, RequestGuards, API_PREFIX};
pub use sprint::{sprint_router, SprintAppState};
