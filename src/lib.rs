//! # audiosep
//!
//! Client SDK for a text-guided audio separation service: hand it an audio
//! clip and a natural-language description of a sound, pick whether to
//! isolate or remove that sound, and get back a processed audio file from
//! the remote inference endpoint.
//!
//! The client hides transient failures behind a bounded retry loop with
//! exponential backoff, spaces successive requests through a per-client
//! rate gate, and decodes the base64 result payload to a local temp file.
//!
//! ## Getting Started
//!
//! ```rust,no_run
//! use audiosep::{ClientConfig, ProcessingMode, SeparationClient, SeparationRequest};
//!
//! # async fn example() -> audiosep::Result<()> {
//! let client = SeparationClient::new(ClientConfig::default())?;
//!
//! let audio = std::fs::read("clip.wav")?;
//! let request = SeparationRequest::new(audio, "dog barking", ProcessingMode::Remove);
//!
//! let result = client.submit(request).await?;
//! println!("processed audio at {}", result.output_path.display());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod media;
pub mod mode;
pub mod presets;
pub mod request;
pub mod retry;
pub mod transport;
pub mod wire;

mod rate;

// Public re-exports for convenience
pub use client::SeparationClient;
pub use config::{ClientConfig, ConfigBuilder, RateLimitConfig, RetryConfig};
pub use error::{Result, SeparationError};
pub use mode::ProcessingMode;
pub use request::{SeparationRequest, SeparationResult};
pub use transport::{HttpTransport, RawResponse, Transport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_imports() {
        // Verify that the public surface compiles
        let _ = std::mem::size_of::<SeparationError>();
    }
}
