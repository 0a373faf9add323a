//! Interactive read-eval-print loop.
//!
//! A session owns one [`Calculator`] for its whole lifetime. It reads one
//! command per line, prints one result per line, and keeps going after a bad
//! line: errors are reported as `error: <message>` and the next prompt is
//! shown. An empty line, `exit`, or end of input ends the session.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::command::{Command, Outcome};
use crate::config::DisplayConfig;
use crate::engine::Calculator;

/// Printed once before the first prompt.
pub const BANNER: &str = "Welcome to The Calculator!";
/// Printed once when the session ends.
pub const FAREWELL: &str = "Good bye!";

/// Whether the loop should read another line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Counters reported when a session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines that produced a result.
    pub executed: usize,
    /// Lines that were rejected.
    pub rejected: usize,
}

/// One calculator plus its display settings.
#[derive(Debug)]
pub struct Session {
    calc: Calculator,
    display: DisplayConfig,
    summary: SessionSummary,
}

impl Session {
    #[must_use]
    pub const fn new(calc: Calculator, display: DisplayConfig) -> Self {
        Self {
            calc,
            display,
            summary: SessionSummary {
                executed: 0,
                rejected: 0,
            },
        }
    }

    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Run the loop until `input` is exhausted or the user leaves.
    ///
    /// # Errors
    /// Only I/O errors on `input` or `output` end the loop early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<SessionSummary> {
        writeln!(output, "{BANNER}")?;
        let mut line = String::new();
        loop {
            write!(output, "{}", self.display.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            if line.trim().is_empty() {
                break;
            }
            if self.execute_line(&line, &mut output)? == Flow::Stop {
                break;
            }
        }
        writeln!(output, "{FAREWELL}")?;
        info!(
            executed = self.summary.executed,
            rejected = self.summary.rejected,
            "session ended"
        );
        Ok(self.summary)
    }

    /// Decode and run one line, writing its result or error to `output`.
    ///
    /// # Errors
    /// Returns I/O errors from `output`; command errors are printed instead.
    pub fn execute_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<Flow> {
        let outcome = Command::parse(line).and_then(|cmd| cmd.run(&mut self.calc));
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(line = line.trim(), error = %err, "command rejected");
                self.summary.rejected += 1;
                writeln!(output, "error: {err}")?;
                return Ok(Flow::Continue);
            }
        };

        if outcome == Outcome::Exit {
            return Ok(Flow::Stop);
        }
        match self.display.format.render(&outcome, self.display.precision) {
            Ok(text) => {
                self.summary.executed += 1;
                if let Some(text) = text {
                    writeln!(output, "{text}")?;
                }
            }
            Err(err) => {
                debug!(line = line.trim(), error = %err, "result not rendered");
                self.summary.rejected += 1;
                writeln!(output, "error: {err}")?;
            }
        }
        Ok(Flow::Continue)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;

    fn transcript(input: &str) -> (String, SessionSummary, Session) {
        let mut session = Session::new(Calculator::new(), DisplayConfig::default());
        let mut out = Vec::new();
        let summary = session.run(input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary, session)
    }

    #[test]
    fn empty_line_ends_session() {
        let (out, summary, session) = transcript("add 1\n\nadd 2\n");
        assert!(out.ends_with("> Good bye!\n"));
        assert_eq!(summary.executed, 1);
        assert_eq!(session.calculator().current(), 1.0);
    }

    #[test]
    fn eof_ends_session() {
        let (out, _, session) = transcript("add 3");
        assert!(out.ends_with("Good bye!\n"));
        assert_eq!(session.calculator().current(), 3.0);
    }

    #[test]
    fn help_prints_manual() {
        let (out, _, _) = transcript("help\n");
        assert!(out.contains("repeat <n>"));
    }

    #[test]
    fn history_lines() {
        let (out, _, _) = transcript("add 5\nneg\nhistory\n");
        assert!(out.contains("add - [5]\nnegate - []\n"));
    }

    #[test]
    fn json_display() {
        let display = DisplayConfig {
            format: OutputFormat::Json,
            prompt: String::new(),
            ..DisplayConfig::default()
        };
        let mut session = Session::new(Calculator::new(), display);
        let mut out = Vec::new();
        session.run("divide 0\n".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(r#"{"current":null}"#), "{out}");
    }

    #[test]
    fn execute_line_reports_flow() {
        let mut session = Session::new(Calculator::new(), DisplayConfig::default());
        let mut out = Vec::new();
        assert_eq!(session.execute_line("add 1", &mut out).unwrap(), Flow::Continue);
        assert_eq!(session.execute_line("bogus", &mut out).unwrap(), Flow::Continue);
        assert_eq!(session.execute_line("exit", &mut out).unwrap(), Flow::Stop);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }
}
