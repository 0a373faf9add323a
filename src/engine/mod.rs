//! Replay engine: the running value, its op log, and `repeat`.
//!
//! Every public primitive updates `current` and appends one [`Operation`] in
//! the same call. [`Calculator::repeat`] re-applies a suffix window of the log
//! through those same primitives, so replayed steps are recorded again.
//!
//! # Nested repeats
//!
//! A `repeat` entry met while replaying is resolved against its own window:
//! for an entry at index `i` with count `m` the nested window is
//! `[max(0, i - m), i)`. Windows only ever look strictly backward, so no cycle
//! can form and recursion depth is bounded by the number of repeat entries.
//!
//! ```text
//! add 5, multiply 2            log: [+5, *2]                     current 10
//! repeat 2                     log: [+5, *2, +5, *2, R2]         current 30
//! repeat 3  → window [2, 5)    +5 → 35, *2 → 70,
//!             R2 at 4 → [2, 4) +5 → 75, *2 → 150                 current 150
//! ```

pub mod options;

use tracing::{debug, trace};

use crate::error::ReplayError;
use crate::oplog::{OpLog, Operation};

pub use options::{EngineOptions, RepeatMode, ResetPolicy};

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// A single numeric register plus the log of steps that produced it.
///
/// Owned by exactly one caller; hosts that share it across threads must
/// serialize access themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    current: f64,
    log: OpLog,
    options: EngineOptions,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// `current = 0`, empty log, default options.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_options(EngineOptions::DEFAULT)
    }

    #[must_use]
    pub const fn with_options(options: EngineOptions) -> Self {
        Self {
            current: 0.0,
            log: OpLog::new(),
            options,
        }
    }

    /// The committed register value.
    #[must_use]
    pub const fn current(&self) -> f64 {
        self.current
    }

    /// Read-only view of the op log.
    #[must_use]
    pub const fn log(&self) -> &OpLog {
        &self.log
    }

    #[must_use]
    pub const fn options(&self) -> EngineOptions {
        self.options
    }

    /// Diagnostic `"operator - operands"` lines. Not used by replay.
    pub fn history(&self) -> impl Iterator<Item = String> + '_ {
        self.log.history()
    }

    // -- primitives ---------------------------------------------------------

    pub fn add(&mut self, a: f64) -> f64 {
        self.current += a;
        self.record(Operation::Add(a))
    }

    pub fn subtract(&mut self, a: f64) -> f64 {
        self.current -= a;
        self.record(Operation::Subtract(a))
    }

    pub fn multiply(&mut self, a: f64) -> f64 {
        self.scale(a);
        self.record(Operation::Multiply(a))
    }

    /// A zero divisor (either sign) sets the register to NaN.
    #[allow(clippy::float_cmp)]
    pub fn divide(&mut self, a: f64) -> f64 {
        self.current = if a == 0.0 { f64::NAN } else { self.current / a };
        self.record(Operation::Divide(a))
    }

    /// Multiply by `-1`, recorded under its own `negate` tag.
    pub fn negate(&mut self) -> f64 {
        self.scale(-1.0);
        self.record(Operation::Negate)
    }

    pub fn absolute(&mut self) -> f64 {
        self.current = self.current.abs();
        self.record(Operation::Absolute)
    }

    /// Square root for `n == 2`, cube root for `n == 3`, NaN otherwise.
    #[allow(clippy::float_cmp)]
    pub fn root(&mut self, n: f64) -> f64 {
        self.current = if n == 2.0 {
            self.current.sqrt()
        } else if n == 3.0 {
            self.current.cbrt()
        } else {
            f64::NAN
        };
        self.record(Operation::Root(n))
    }

    pub fn power(&mut self, n: f64) -> f64 {
        self.current = self.current.powf(n);
        self.record(Operation::Power(n))
    }

    /// Zero the register. Under [`ResetPolicy::Clear`] the log is emptied and
    /// nothing is recorded; under [`ResetPolicy::Record`] a `reset` entry is
    /// appended instead. Always returns `0`.
    pub fn reset(&mut self) -> f64 {
        self.current = 0.0;
        match self.options.reset {
            ResetPolicy::Clear => self.log.clear(),
            ResetPolicy::Record => self.log.append(Operation::Reset),
        }
        self.current
    }

    /// Re-apply the last `floor(count)` log entries, oldest first.
    ///
    /// A count larger than the log replays the whole log. An empty log leaves
    /// `current` untouched. In [`RepeatMode::Recursive`] a `repeat` marker
    /// carrying `count` is appended once the window is done.
    ///
    /// # Errors
    /// Returns [`ReplayError::InvalidArgument`] for a negative or NaN count;
    /// the register and the log are left unchanged.
    pub fn repeat(&mut self, count: f64) -> Result<f64, ReplayError> {
        if count.is_nan() || count < 0.0 {
            return Err(ReplayError::InvalidArgument { count });
        }
        Ok(self.dispatch(Operation::Repeat(count)))
    }

    /// Dispatch one operation to its primitive.
    ///
    /// # Errors
    /// Only [`Operation::Repeat`] can fail, see [`Calculator::repeat`].
    pub fn apply(&mut self, op: Operation) -> Result<f64, ReplayError> {
        match op {
            Operation::Repeat(count) => self.repeat(count),
            other => Ok(self.dispatch(other)),
        }
    }

    // -- internals ----------------------------------------------------------

    /// Run `op` against the current log end. Repeat counts are already valid.
    fn dispatch(&mut self, op: Operation) -> f64 {
        match op {
            Operation::Add(a) => self.add(a),
            Operation::Subtract(a) => self.subtract(a),
            Operation::Multiply(a) => self.multiply(a),
            Operation::Divide(a) => self.divide(a),
            Operation::Negate => self.negate(),
            Operation::Absolute => self.absolute(),
            Operation::Root(n) => self.root(n),
            Operation::Power(n) => self.power(n),
            Operation::Reset => self.reset(),
            Operation::Repeat(count) => {
                let end = self.log.len();
                self.replay_window(end, count, 0);
                self.current
            }
        }
    }

    /// Replay `[end - floor(count), end)` and, in recursive mode, record the
    /// repeat. `end` is the log length at the moment the repeat was issued.
    fn replay_window(&mut self, end: usize, count: f64, depth: usize) {
        let start = end.saturating_sub(window_len(count));
        debug!(start, end, depth, count, "replaying repeat window");

        for index in start..end {
            // A replayed clear-policy reset empties the log; nothing is left.
            let Some(&op) = self.log.get(index) else {
                break;
            };
            trace!(index, depth, op = %op, "replay");
            match op {
                Operation::Repeat(nested) => self.replay_window(index, nested, depth + 1),
                primitive => {
                    self.dispatch(primitive);
                }
            }
        }

        if self.options.repeat == RepeatMode::Recursive {
            self.log.append(Operation::Repeat(count));
        }
    }

    fn scale(&mut self, factor: f64) {
        self.current *= factor;
    }

    fn record(&mut self, op: Operation) -> f64 {
        self.log.append(op);
        self.current
    }
}

/// Number of entries a repeat count covers. Counts are validated to be
/// non-negative before they reach the log; `+inf` saturates.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn window_len(count: f64) -> usize {
    count.floor() as usize
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
