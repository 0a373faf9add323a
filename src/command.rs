//! Decoding of one user input line into a [`Command`].
//!
//! A line is a command name optionally followed by one numeric operand,
//! separated by whitespace. Anything else is rejected with a [`CalcError`]
//! that points the user at the manual.

use std::str::FromStr;

use crate::engine::Calculator;
use crate::error::CalcError;
use crate::oplog::{OpLog, Operation};

/// Text printed by `help` and `recalc manual`.
pub const MANUAL: &str = "\
recalc keeps a running value, starting at 0, and applies each command to it.
add <float>      : add <float> to current
subtract <float> : subtract <float> from current
multiply <float> : multiply current by <float>
divide <float>   : divide current by <float>; dividing by 0 gives NaN
neg              : negate current, equal to multiplying by -1
abs              : make current positive
sqrt             : square root of current
cbrt             : cube root of current
root <n>         : n-th root of current, only 2 and 3 are supported
sqr              : square of current
cube             : cube of current
pow <float>      : raise current to <float>
repeat <n>       : replay the last <n> steps; a replayed repeat replays its own steps
cancel           : set current to 0 (alias: reset)
history          : list the recorded steps
exit             : leave the calculator (an empty line does the same)
help             : show this manual";

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// One decoded input line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Apply a step to the calculator.
    Apply(Operation),
    /// Show the recorded steps.
    History,
    /// Show the manual.
    Help,
    /// End the session.
    Exit,
}

/// What running a [`Command`] produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The register after the step.
    Value(f64),
    /// A snapshot of the op log.
    History(Vec<Operation>),
    /// The manual text.
    Manual,
    /// The session should end.
    Exit,
}

impl Command {
    /// Decode one line.
    ///
    /// # Errors
    /// See [`CalcError`] for the rejected shapes.
    pub fn parse(line: &str) -> Result<Self, CalcError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(CalcError::EmptyCommand);
        };
        let operand = tokens
            .next()
            .map(|token| {
                token.parse::<f64>().map_err(|_| CalcError::InvalidOperand {
                    token: token.to_owned(),
                })
            })
            .transpose();
        if tokens.next().is_some() {
            return Err(CalcError::TooManyArguments {
                line: line.trim().to_owned(),
            });
        }
        let operand = operand?;

        let unary = |build: fn(f64) -> Operation| {
            operand
                .map(|value| Self::Apply(build(value)))
                .ok_or_else(|| CalcError::MissingOperand {
                    command: name.to_owned(),
                })
        };
        let nullary = |command: Self| {
            if operand.is_some() {
                Err(CalcError::UnexpectedOperand {
                    command: name.to_owned(),
                })
            } else {
                Ok(command)
            }
        };

        match name {
            "add" => unary(Operation::Add),
            "subtract" => unary(Operation::Subtract),
            "multiply" => unary(Operation::Multiply),
            "divide" => unary(Operation::Divide),
            "root" => unary(Operation::Root),
            "pow" => unary(Operation::Power),
            "repeat" => unary(Operation::Repeat),
            "neg" => nullary(Self::Apply(Operation::Negate)),
            "abs" => nullary(Self::Apply(Operation::Absolute)),
            "sqrt" => nullary(Self::Apply(Operation::Root(2.0))),
            "cbrt" => nullary(Self::Apply(Operation::Root(3.0))),
            "sqr" => nullary(Self::Apply(Operation::Power(2.0))),
            "cube" => nullary(Self::Apply(Operation::Power(3.0))),
            "cancel" | "reset" => nullary(Self::Apply(Operation::Reset)),
            "history" => nullary(Self::History),
            "help" => nullary(Self::Help),
            "exit" => nullary(Self::Exit),
            _ => Err(CalcError::UnknownCommand {
                name: name.to_owned(),
            }),
        }
    }

    /// Run this command against `calc`.
    ///
    /// # Errors
    /// Propagates the engine's [`ReplayError`](crate::error::ReplayError).
    pub fn run(self, calc: &mut Calculator) -> Result<Outcome, CalcError> {
        match self {
            Self::Apply(op) => Ok(Outcome::Value(calc.apply(op)?)),
            Self::History => Ok(Outcome::History(snapshot(calc.log()))),
            Self::Help => Ok(Outcome::Manual),
            Self::Exit => Ok(Outcome::Exit),
        }
    }
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn snapshot(log: &OpLog) -> Vec<Operation> {
    log.iter().copied().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
