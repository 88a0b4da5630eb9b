//! Backoff schedules for the retry loop
//!
//! Two curves share one base delay: a capped exponential curve for generic
//! transient failures, and a steeper uncapped curve used after the server's
//! explicit throttling signal.

use std::time::Duration;

use crate::config::RetryConfig;

/// Delay curves derived from the retry configuration
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    base: Duration,
    max: Duration,
}

impl Backoff {
    pub fn new(base: Duration, max: Duration) -> Self {
        Self { base, max }
    }

    /// Delay before retrying a generic transient failure:
    /// `min(base * 2^attempt, max)`
    pub fn generic_delay(&self, attempt: usize) -> Duration {
        let delay = self.base.mul_f64(2f64.powi(attempt as i32));
        if delay > self.max {
            self.max
        } else {
            delay
        }
    }

    /// Delay after a throttling signal: `base * 2^(attempt + 1)`, uncapped
    pub fn throttle_delay(&self, attempt: usize) -> Duration {
        self.base.mul_f64(2f64.powi(attempt as i32 + 1))
    }
}

impl From<&RetryConfig> for Backoff {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.base_delay, config.max_delay)
    }
}
