//! Per-instance engine behaviour switches.
//!
//! Both switches pick one behaviour for the whole lifetime of a calculator;
//! the engine never mixes them. They are also the `[engine]` table of the
//! configuration file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What `reset` does to the op log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResetPolicy {
    /// Zero the register and empty the log. Nothing is recorded.
    #[default]
    Clear,
    /// Zero the register and record a replayable `reset` entry.
    Record,
}

impl fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear => write!(f, "clear"),
            Self::Record => write!(f, "record"),
        }
    }
}

/// How `repeat` records itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatMode {
    /// Append a `repeat` marker after each replayed window. A later repeat
    /// that meets the marker re-derives the marker's own window.
    #[default]
    Recursive,
    /// Record only the replayed primitive steps; no marker is appended.
    Flatten,
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recursive => write!(f, "recursive"),
            Self::Flatten => write!(f, "flatten"),
        }
    }
}

/// Engine switches, deserialized from `[engine]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineOptions {
    /// Reset behaviour (default: `clear`).
    #[serde(default)]
    pub reset: ResetPolicy,

    /// Repeat recording mode (default: `recursive`).
    #[serde(default)]
    pub repeat: RepeatMode,
}

impl EngineOptions {
    /// `clear` reset, `recursive` repeat.
    pub const DEFAULT: Self = Self {
        reset: ResetPolicy::Clear,
        repeat: RepeatMode::Recursive,
    };
}
