//! Calculator configuration (`recalc.toml`).
//!
//! Defines the typed configuration for display settings and the engine's
//! reset/repeat behaviour. Missing file → all defaults (no error).

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::engine::EngineOptions;
use crate::format::OutputFormat;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Top-level calculator configuration.
///
/// ```toml
/// [display]
/// precision = 2
/// prompt = "> "
/// format = "text"
///
/// [engine]
/// reset = "clear"
/// repeat = "recursive"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecalcConfig {
    /// How results are printed.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Engine behaviour switches.
    #[serde(default)]
    pub engine: EngineOptions,
}

// ---------------------------------------------------------------------------
// DisplayConfig
// ---------------------------------------------------------------------------

/// Session output settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Digits after the decimal point for text results (default: 2).
    ///
    /// Bounded by what `format!` accepts at runtime.
    #[serde(default = "default_precision")]
    pub precision: u16,

    /// Prompt printed before each line is read (default: `"> "`).
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Result format (default: `text`).
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            prompt: default_prompt(),
            format: OutputFormat::default(),
        }
    }
}

const fn default_precision() -> u16 {
    2
}

fn default_prompt() -> String {
    "> ".to_owned()
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// `recalc.toml` could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("{}: could not read file: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The contents are not a valid configuration.
    #[error("{}line {line}: {message}", origin(path.as_deref()))]
    Invalid {
        /// Set once the text is known to come from a file.
        path: Option<PathBuf>,
        /// 1-based line of the offending key or value.
        line: usize,
        message: String,
    },
}

fn origin(path: Option<&Path>) -> String {
    path.map_or_else(|| "config error: ".to_owned(), |p| format!("{}: ", p.display()))
}

impl RecalcConfig {
    /// Load `path`. A missing file yields the defaults.
    ///
    /// # Errors
    /// [`ConfigError::Read`] for I/O failures other than not-found,
    /// [`ConfigError::Invalid`] for bad contents.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                });
            }
        };
        Self::parse(&text).map_err(|err| match err {
            ConfigError::Invalid { line, message, .. } => ConfigError::Invalid {
                path: Some(path.to_owned()),
                line,
                message,
            },
            read @ ConfigError::Read { .. } => read,
        })
    }

    /// Parse TOML text. Unknown tables and keys are rejected, as are values
    /// outside a field's range.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] naming the line of the first problem.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Invalid {
            path: None,
            line: e
                .span()
                .map_or(1, |span| text[..span.start].matches('\n').count() + 1),
            message: e.message().to_owned(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
