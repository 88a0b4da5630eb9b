//! Curated prompt presets for common separation tasks

use crate::mode::ProcessingMode;

/// A quick preset with an optimized prompt for a common audio task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub title: &'static str,
    pub description: &'static str,
    pub mode: ProcessingMode,
    pub prompt: &'static str,
}

/// Core presets covering the most common use cases.
pub const LIBRARY: &[Preset] = &[
    Preset {
        title: "Isolate Voice",
        description: "Extract speech, remove background",
        mode: ProcessingMode::Isolate,
        prompt: "A person speaking",
    },
    Preset {
        title: "Remove Noise",
        description: "Clean up unwanted sounds",
        mode: ProcessingMode::Remove,
        prompt: "Background noise and ambient sounds",
    },
    Preset {
        title: "Remove Wind",
        description: "Fix outdoor recordings",
        mode: ProcessingMode::Remove,
        prompt: "Wind noise",
    },
    Preset {
        title: "Isolate Music",
        description: "Keep music, remove speech",
        mode: ProcessingMode::Isolate,
        prompt: "Music and instruments",
    },
    Preset {
        title: "Isolate Vocals",
        description: "Extract singing voice",
        mode: ProcessingMode::Isolate,
        prompt: "Singing voice and vocals",
    },
    Preset {
        title: "Remove Music",
        description: "Keep speech, remove music",
        mode: ProcessingMode::Remove,
        prompt: "Background music",
    },
];
