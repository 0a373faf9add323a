use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::Deserialize;
use serde_json::json;

use crate::command::{MANUAL, Outcome};

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text - fixed-precision numbers, one history line per step
    #[default]
    Text,
    /// JSON - one document per result
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => bail!("Invalid format '{}'. Use: text or json", s),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl OutputFormat {
    /// Render a command outcome. `precision` only applies to text values.
    ///
    /// Returns `None` when there is nothing to print: [`Outcome::Exit`], or a
    /// text history of an empty log.
    pub fn render(self, outcome: &Outcome, precision: u16) -> Result<Option<String>> {
        let precision = usize::from(precision);
        let rendered = match (self, outcome) {
            (_, Outcome::Exit) => return Ok(None),
            (Self::Text, Outcome::History(ops)) if ops.is_empty() => return Ok(None),
            (_, Outcome::Manual) => MANUAL.to_owned(),
            (Self::Text, Outcome::Value(value)) => format!("{value:.precision$}"),
            (Self::Json, Outcome::Value(value)) => json!({ "current": value }).to_string(),
            (Self::Text, Outcome::History(ops)) => ops
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            (Self::Json, Outcome::History(ops)) => serde_json::to_string(ops)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {}", e))?,
        };
        Ok(Some(rendered))
    }
}
