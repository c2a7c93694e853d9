//! Arbitration behavior vocabulary.
//!
//! A behavior names the action applied to an affected usage while an active
//! usage has live streams. The wire format keeps the field an open string;
//! the loader enforces this closed set at semantic-validation time.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Recognized behavior identifiers.
pub const BEHAVIORS: [&str; 3] = ["none", "duck", "mute"];

/// Whether `s` names a recognized behavior.
pub fn is_known_behavior(s: &str) -> bool {
    BEHAVIORS.contains(&s)
}

/// A validated arbitration behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// Leave the affected usage untouched.
    None,
    /// Lower the affected usage's gain while the active usage plays.
    Duck,
    /// Silence the affected usage entirely.
    Mute,
}

impl Behavior {
    /// Every recognized behavior.
    pub const ALL: [Behavior; 3] = [Behavior::None, Behavior::Duck, Behavior::Mute];

    /// Parse a wire identifier into a behavior. Returns `None` for anything
    /// outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Behavior::None),
            "duck" => Some(Behavior::Duck),
            "mute" => Some(Behavior::Mute),
            _ => None,
        }
    }

    /// The wire identifier for this behavior.
    pub fn as_str(self) -> &'static str {
        match self {
            Behavior::None => "none",
            Behavior::Duck => "duck",
            Behavior::Mute => "mute",
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
