//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Label Ports
//!
//! - `LabelRepository` - Label persistence (write side)
//! - `LabelReader` - Label lists with issue counts
//!
//! ## Sprint Ports
//!
//! - `SprintRepository` - Sprint persistence and lifecycle transitions
//! - `SprintReader` - Sprint lists and the expanded detail view
//!
//! ## Request Guard Ports
//!
//! - `TokenValidator` - Bearer token verification
//! - `RateLimiter` - Per-client request budget

mod label_reader;
mod label_repository;
mod rate_limiter;
mod sprint_reader;
mod sprint_repository;
mod token_validator;

pub use label_reader::{LabelReader, LabelSummary};
pub use label_repository::LabelRepository;
pub use rate_limiter::{RateLimitDecision, RateLimitStatus, RateLimiter};
pub use sprint_reader::{
    IssueAssignee, IssueColumn, IssueTypeView, SprintDetail, SprintIssueView, SprintReader,
    SprintSummary,
};
pub use sprint_repository::SprintRepository;
pub use token_validator::TokenValidator;
