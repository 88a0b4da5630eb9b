//! Processing modes for separation requests

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with the described sound: keep only it, or delete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    /// Keep only the specified sound, remove everything else
    Isolate,
    /// Remove the specified sound, keep everything else
    Remove,
}

impl ProcessingMode {
    pub const ALL: [ProcessingMode; 2] = [ProcessingMode::Isolate, ProcessingMode::Remove];

    /// Wire tag used in request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingMode::Isolate => "isolate",
            ProcessingMode::Remove => "remove",
        }
    }

    /// User-facing display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessingMode::Isolate => "Isolate Sound",
            ProcessingMode::Remove => "Remove Sound",
        }
    }

    /// Description of what this mode does
    pub fn description(&self) -> &'static str {
        match self {
            ProcessingMode::Isolate => "Keep only the specified sound, remove everything else",
            ProcessingMode::Remove => "Remove the specified sound, keep everything else",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
