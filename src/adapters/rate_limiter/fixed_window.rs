//! In-process fixed-window rate limiter.
//!
//! Each key gets `limit` requests per window; the counter resets when the
//! window ends. State lives in this process only, so a multi-instance
//! deployment needs a shared backend instead.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::ThrottleConfig;
use crate::ports::{RateLimitDecision, RateLimitStatus, RateLimiter};

/// Expired windows are swept once the map grows past this many keys.
const SWEEP_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    started_at: u64,
}

#[derive(Debug)]
pub struct FixedWindowRateLimiter {
    limit: u32,
    window_secs: u64,
    windows: RwLock<HashMap<String, Window>>,
}

impl FixedWindowRateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window_secs: window.as_secs().max(1),
            windows: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &ThrottleConfig) -> Self {
        Self::new(config.requests_per_window, config.window())
    }

    async fn check_at(&self, key: &str, now: u64) -> RateLimitDecision {
        let mut windows = self.windows.write().await;

        if windows.len() > SWEEP_THRESHOLD {
            let window_secs = self.window_secs;
            windows.retain(|_, w| now < w.started_at + window_secs);
        }

        let window = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started_at: now,
        });
        if now >= window.started_at + self.window_secs {
            *window = Window {
                count: 0,
                started_at: now,
            };
        }

        let reset_at = window.started_at + self.window_secs;
        if window.count >= self.limit {
            return RateLimitDecision::Denied {
                limit: self.limit,
                retry_after_secs: reset_at.saturating_sub(now).max(1),
            };
        }

        window.count += 1;
        RateLimitDecision::Allowed(RateLimitStatus {
            limit: self.limit,
            remaining: self.limit - window.count,
            reset_at,
        })
    }
}

fn unix_now() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default()
}

#[async_trait]
impl RateLimiter for FixedWindowRateLimiter {
    async fn check(&self, key: &str) -> RateLimitDecision {
        self.check_at(key, unix_now()).await
    }
}
