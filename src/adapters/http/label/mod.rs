//! HTTP adapter for labels.
//!
//! # Endpoints
//!
//! - `GET /projects/{projectId}/labels` - List a project's labels
//! - `POST /projects/{projectId}/labels` - Create a label
//! - `PATCH /labels/{id}` - Update a label
//! - `DELETE /labels/{id}` - Delete a label

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::LabelAppState;
pub use routes::label_router;
