//! Audio usage vocabulary.
//!
//! A usage names the purpose of an audio stream. Render usages apply to
//! playback streams, capture usages to recording streams. The two sets
//! overlap textually (e.g. `communication` exists on both sides), and the
//! policy wire format does not tag which side an identifier refers to, so
//! rule validation checks membership in the union.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Usages applicable to playback (output) streams.
pub const RENDER_USAGES: [&str; 6] = [
    "background",
    "media",
    "interruption",
    "system_agent",
    "communication",
    "ultrasound",
];

/// Usages applicable to recording (input) streams.
pub const CAPTURE_USAGES: [&str; 5] = [
    "background",
    "foreground",
    "system_agent",
    "communication",
    "ultrasound",
];

/// Whether `s` names a render usage.
pub fn is_render_usage(s: &str) -> bool {
    RENDER_USAGES.contains(&s)
}

/// Whether `s` names a capture usage.
pub fn is_capture_usage(s: &str) -> bool {
    CAPTURE_USAGES.contains(&s)
}

/// Whether `s` names any recognized usage (render or capture).
pub fn is_known_usage(s: &str) -> bool {
    is_render_usage(s) || is_capture_usage(s)
}

/// A validated usage identifier: the union of the render and capture sets.
///
/// Produced by the loader after membership checking; the wire format itself
/// stays an open string (see [`crate::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Usage {
    Background,
    Communication,
    Foreground,
    Interruption,
    Media,
    SystemAgent,
    Ultrasound,
}

impl Usage {
    /// Every recognized usage, in lexical order of the wire identifier.
    pub const ALL: [Usage; 7] = [
        Usage::Background,
        Usage::Communication,
        Usage::Foreground,
        Usage::Interruption,
        Usage::Media,
        Usage::SystemAgent,
        Usage::Ultrasound,
    ];

    /// Parse a wire identifier into a usage. Total: returns `None` for
    /// anything outside the union vocabulary.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "background" => Some(Usage::Background),
            "communication" => Some(Usage::Communication),
            "foreground" => Some(Usage::Foreground),
            "interruption" => Some(Usage::Interruption),
            "media" => Some(Usage::Media),
            "system_agent" => Some(Usage::SystemAgent),
            "ultrasound" => Some(Usage::Ultrasound),
            _ => None,
        }
    }

    /// The wire identifier for this usage.
    pub fn as_str(self) -> &'static str {
        match self {
            Usage::Background => "background",
            Usage::Communication => "communication",
            Usage::Foreground => "foreground",
            Usage::Interruption => "interruption",
            Usage::Media => "media",
            Usage::SystemAgent => "system_agent",
            Usage::Ultrasound => "ultrasound",
        }
    }

    /// Whether this usage can classify a playback stream.
    pub fn is_render(self) -> bool {
        is_render_usage(self.as_str())
    }

    /// Whether this usage can classify a recording stream.
    pub fn is_capture(self) -> bool {
        is_capture_usage(self.as_str())
    }
}

impl std::fmt::Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
