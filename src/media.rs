//! Client-side constraints on uploadable media
//!
//! The backend bills per clip, so files are checked before upload: container
//! format by extension, size from file metadata, and clip length when the
//! caller knows it. Decoding media to measure duration is out of scope here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Container formats the backend accepts
pub const SUPPORTED_FORMATS: &[&str] = &[
    "mp3", "wav", "m4a", "aac", "flac", "mp4", "mov", "aiff",
];

/// Upload size cap
pub const MAX_FILE_SIZE_BYTES: u64 = 100_000_000;

/// Hard limit on clip length
pub const MAX_CLIP_DURATION: Duration = Duration::from_secs(30);

/// Clip length that processes fastest with the best results
pub const RECOMMENDED_CLIP_DURATION: Duration = Duration::from_secs(15);

/// Why a file was rejected before upload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("unsupported file format: .{0}")]
    UnsupportedFormat(String),
    #[error("file too large: {0} bytes")]
    TooLarge(u64),
    #[error("file is empty")]
    Empty,
    #[error("clip too long: {0} seconds")]
    TooLong(u64),
}

/// Whether a file extension is accepted for upload
pub fn is_format_supported(format: &str) -> bool {
    SUPPORTED_FORMATS.contains(&format.to_ascii_lowercase().as_str())
}

/// A local audio or video file with the metadata needed for validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    pub size: u64,
    /// Lowercased file extension
    pub format: String,
    /// Clip length when the caller knows it; checked only when present
    pub duration: Option<Duration>,
}

impl MediaFile {
    /// Probe a file on disk: size from metadata, format from the extension.
    pub fn probe(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let size = std::fs::metadata(&path)?.len();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        Ok(Self {
            path,
            size,
            format,
            duration: None,
        })
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Check the file against the upload constraints.
    pub fn validate(&self) -> Result<(), MediaError> {
        if !is_format_supported(&self.format) {
            return Err(MediaError::UnsupportedFormat(self.format.clone()));
        }
        if self.size == 0 {
            return Err(MediaError::Empty);
        }
        if self.size > MAX_FILE_SIZE_BYTES {
            return Err(MediaError::TooLarge(self.size));
        }
        if let Some(duration) = self.duration {
            if duration > MAX_CLIP_DURATION {
                return Err(MediaError::TooLong(duration.as_secs()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn media(format: &str, size: u64) -> MediaFile {
        MediaFile {
            path: PathBuf::from(format!("clip.{format}")),
            size,
            format: format.to_string(),
            duration: None,
        }
    }

    #[test]
    fn test_format_support_is_case_insensitive() {
        assert!(is_format_supported("wav"));
        assert!(is_format_supported("WAV"));
        assert!(!is_format_supported("ogg"));
    }

    #[test]
    fn test_validate_accepts_a_normal_clip() {
        let file = media("wav", 1024).with_duration(Duration::from_secs(12));
        assert_eq!(file.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unsupported_format() {
        let err = media("ogg", 1024).validate().unwrap_err();
        assert_eq!(err, MediaError::UnsupportedFormat("ogg".to_string()));
    }

    #[test]
    fn test_validate_rejects_oversized_and_empty_files() {
        assert_eq!(
            media("mp3", MAX_FILE_SIZE_BYTES + 1).validate(),
            Err(MediaError::TooLarge(MAX_FILE_SIZE_BYTES + 1))
        );
        assert_eq!(media("mp3", 0).validate(), Err(MediaError::Empty));
    }

    #[test]
    fn test_validate_rejects_long_clips_only_when_duration_known() {
        let long = media("wav", 1024).with_duration(Duration::from_secs(45));
        assert_eq!(long.validate(), Err(MediaError::TooLong(45)));

        let unknown = media("wav", 1024);
        assert_eq!(unknown.validate(), Ok(()));
    }

    #[test]
    fn test_probe_reads_size_and_extension() {
        let mut tmp = tempfile::Builder::new().suffix(".WAV").tempfile().unwrap();
        tmp.write_all(&[0u8; 64]).unwrap();

        let file = MediaFile::probe(tmp.path()).unwrap();
        assert_eq!(file.size, 64);
        assert_eq!(file.format, "wav");
        assert_eq!(file.validate(), Ok(()));
    }
}
