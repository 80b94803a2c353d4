//! Request throttling port.
//!
//! Counts requests per key (the client IP) inside a time window. The HTTP
//! middleware turns a denial into `429 Too Many Requests`.

use async_trait::async_trait;

/// Budget left after an admitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub limit: u32,
    pub remaining: u32,
    /// Unix seconds at which the current window ends.
    pub reset_at: u64,
}

/// Outcome of counting one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed(RateLimitStatus),
    Denied { limit: u32, retry_after_secs: u64 },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitDecision::Allowed(_))
    }
}

#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Counts one request against `key`.
    async fn check(&self, key: &str) -> RateLimitDecision;
}
