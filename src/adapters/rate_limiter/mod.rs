//! Rate limiter adapters.

mod fixed_window;

pub use fixed_window::FixedWindowRateLimiter;
