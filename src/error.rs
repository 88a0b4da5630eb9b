//! Error types for the separation client

use thiserror::Error;

/// Result type alias for the separation client
pub type Result<T> = std::result::Result<T, SeparationError>;

/// Main error type for the separation client
#[derive(Debug, Error)]
pub enum SeparationError {
    /// The configured endpoint is not a valid URL
    #[error("invalid API endpoint: {0}")]
    InvalidEndpoint(String),

    /// Response was structurally unparseable or logically incomplete
    #[error("invalid response from server")]
    InvalidResponse,

    /// Server asked us to slow down (HTTP 429)
    #[error("server is busy (HTTP 429)")]
    Throttled,

    /// Backend reported a processing failure
    #[error("processing failed: {message}")]
    ProcessingFailed { message: String },

    /// Transport-level failure; no usable response was received
    #[error("network error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Local I/O error while persisting the decoded result
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// All attempts consumed; wraps the last retryable failure observed
    #[error("giving up after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: usize,
        #[source]
        source: Box<SeparationError>,
    },
}

impl From<reqwest::Error> for SeparationError {
    fn from(err: reqwest::Error) -> Self {
        SeparationError::Transport(Box::new(err))
    }
}

impl SeparationError {
    /// Whether the retry loop may attempt the request again
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SeparationError::Throttled
                | SeparationError::ProcessingFailed { .. }
                | SeparationError::Transport(_)
        )
    }

    /// Whether this is the server's explicit throttling signal, which gets
    /// its own steeper backoff curve
    pub fn is_throttle(&self) -> bool {
        matches!(self, SeparationError::Throttled)
    }
}
