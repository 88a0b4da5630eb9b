//! Configuration for the separation client
//!
//! Defaults carry the production constants; everything is overridable
//! through the builder, environment variables, or a TOML file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the separation endpoint
    pub base_url: String,

    /// Timeout for a single upload/processing request. The first request
    /// after a cold start can take minutes, so the default is generous.
    pub request_timeout: Duration,

    /// Retry configuration
    pub retry: RetryConfig,

    /// Rate limiting configuration
    pub rate_limit: RateLimitConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.audiosep.dev".to_string(),
            request_timeout: Duration::from_secs(600),
            retry: RetryConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

/// Retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per submit, all failure kinds included
    pub max_attempts: usize,

    /// Base delay for the exponential backoff curves
    pub base_delay: Duration,

    /// Ceiling on the generic backoff delay
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(30),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Minimum spacing between successive call starts on one client
    pub min_request_interval: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            min_request_interval: Duration::from_secs(1),
        }
    }
}

/// Configuration builder
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.config.retry.max_attempts = attempts;
        self
    }

    pub fn base_delay(mut self, delay: Duration) -> Self {
        self.config.retry.base_delay = delay;
        self
    }

    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.config.retry.max_delay = delay;
        self
    }

    pub fn min_request_interval(mut self, interval: Duration) -> Self {
        self.config.rate_limit.min_request_interval = interval;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Load configuration from environment variables
pub fn from_env() -> ClientConfig {
    let mut config = ClientConfig::default();

    if let Ok(url) = std::env::var("AUDIOSEP_BASE_URL") {
        config.base_url = url;
    }

    if let Ok(timeout) = std::env::var("AUDIOSEP_TIMEOUT_SECS") {
        if let Ok(secs) = timeout.parse::<u64>() {
            config.request_timeout = Duration::from_secs(secs);
        }
    }

    if let Ok(attempts) = std::env::var("AUDIOSEP_MAX_ATTEMPTS") {
        if let Ok(n) = attempts.parse::<usize>() {
            config.retry.max_attempts = n;
        }
    }

    config
}

/// Load configuration from a TOML file
pub fn from_file(
    path: impl AsRef<std::path::Path>,
) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(600));
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.base_delay, Duration::from_secs(2));
        assert_eq!(config.retry.max_delay, Duration::from_secs(30));
        assert_eq!(
            config.rate_limit.min_request_interval,
            Duration::from_secs(1)
        );
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .base_url("https://separation.example.com")
            .request_timeout(Duration::from_secs(30))
            .max_attempts(5)
            .base_delay(Duration::from_millis(100))
            .min_request_interval(Duration::from_millis(250))
            .build();

        assert_eq!(config.base_url, "https://separation.example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.base_delay, Duration::from_millis(100));
        assert_eq!(
            config.rate_limit.min_request_interval,
            Duration::from_millis(250)
        );
    }
}
