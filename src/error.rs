//! Error types for the calculator engine and the command layer.
//!
//! Numeric edge cases (divide by zero, unsupported root degree, NaN
//! propagation) are never errors: they produce IEEE-754 values in the
//! register. The only engine failure is a repeat with an invalid count.
//! Everything else here belongs to decoding a user's command line.

use thiserror::Error;

// ---------------------------------------------------------------------------
// ReplayError
// ---------------------------------------------------------------------------

/// Errors returned by the replay engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    /// `repeat` was called with a negative (or NaN) count. State is unchanged.
    #[error("invalid argument: repeat count must be non-negative, got {count}")]
    InvalidArgument {
        /// The rejected count.
        count: f64,
    },
}

// ---------------------------------------------------------------------------
// CalcError
// ---------------------------------------------------------------------------

/// Errors surfaced to the user for one input line.
///
/// Each message ends with a pointer to the manual so the session can keep
/// going after it is printed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The line held no tokens.
    #[error("empty command: read manual with 'help' command")]
    EmptyCommand,

    /// The line held more than a command and one operand.
    #[error("too many arguments in `{line}`: read manual with 'help' command")]
    TooManyArguments {
        /// The trimmed input line.
        line: String,
    },

    /// The operand token is not a number.
    #[error("invalid operand `{token}`: read manual with 'help' command")]
    InvalidOperand {
        /// The token that failed to parse.
        token: String,
    },

    /// The command name is not recognised.
    #[error("unknown command `{name}`: read manual with 'help' command")]
    UnknownCommand {
        /// The unrecognised name.
        name: String,
    },

    /// A command that takes no operand was given one.
    #[error("`{command}` takes no operand: read manual with 'help' command")]
    UnexpectedOperand {
        /// The command name.
        command: String,
    },

    /// A command that needs an operand was given none.
    #[error("`{command}` needs a numeric operand: read manual with 'help' command")]
    MissingOperand {
        /// The command name.
        command: String,
    },

    /// The engine rejected the command.
    #[error(transparent)]
    Replay(#[from] ReplayError),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
