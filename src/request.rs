//! Separation requests and results

use std::path::PathBuf;
use std::time::Duration;

use crate::mode::ProcessingMode;

/// A media-processing request: raw audio bytes plus a natural-language
/// description of the sound to act on. Immutable once constructed; the same
/// payload is reused across retry attempts.
#[derive(Debug, Clone)]
pub struct SeparationRequest {
    /// Raw audio bytes to upload
    pub audio: Vec<u8>,
    /// Description of the sound, e.g. "dog barking"
    pub prompt: String,
    /// Whether to isolate or remove the described sound
    pub mode: ProcessingMode,
    /// Enable span prediction and re-ranking (slower, better)
    pub high_quality: bool,
}

impl SeparationRequest {
    pub fn new(audio: Vec<u8>, prompt: impl Into<String>, mode: ProcessingMode) -> Self {
        Self {
            audio,
            prompt: prompt.into(),
            mode,
            high_quality: false,
        }
    }

    /// Request the slower, higher-quality processing path
    pub fn with_high_quality(mut self, enabled: bool) -> Self {
        self.high_quality = enabled;
        self
    }
}

/// Outcome of a successful submit
#[derive(Debug, Clone)]
pub struct SeparationResult {
    /// Freshly written file containing the processed audio. The caller owns
    /// the file and its lifetime after return.
    pub output_path: PathBuf,
    /// Wall time of the winning attempt
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_standard_quality() {
        let request = SeparationRequest::new(vec![1, 2, 3], "wind noise", ProcessingMode::Remove);
        assert!(!request.high_quality);
        assert_eq!(request.prompt, "wind noise");
    }

    #[test]
    fn test_with_high_quality() {
        let request = SeparationRequest::new(vec![], "vocals", ProcessingMode::Isolate)
            .with_high_quality(true);
        assert!(request.high_quality);
    }
}
