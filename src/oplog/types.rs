//! Operator tags and the [`Operation`] record stored in the op log.
//!
//! An operation is one applied calculator step: an operator plus the 0 or 1
//! operand it was applied with. Operations are immutable once recorded and
//! carry enough data to be replayed by the engine.
//!
//! JSON shape (adjacently tagged):
//! - `{"operator":"add","operand":5.0}`
//! - `{"operator":"negate"}`

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Operator
// ---------------------------------------------------------------------------

/// The closed set of operator tags an [`Operation`] can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `current += a`
    Add,
    /// `current -= a`
    Subtract,
    /// `current *= a`
    Multiply,
    /// `current /= a`, NaN on a zero divisor.
    Divide,
    /// `current *= -1`
    Negate,
    /// `current = |current|`
    Absolute,
    /// Square or cube root; any other degree yields NaN.
    Root,
    /// `current = current.powf(n)`
    Power,
    /// Zero the register (only recorded under the `record` reset policy).
    Reset,
    /// Re-execute a suffix window of the log.
    Repeat,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Negate,
        Self::Absolute,
        Self::Root,
        Self::Power,
        Self::Reset,
        Self::Repeat,
    ];

    /// Lowercase tag used in history lines and JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Negate => "negate",
            Self::Absolute => "absolute",
            Self::Root => "root",
            Self::Power => "power",
            Self::Reset => "reset",
            Self::Repeat => "repeat",
        }
    }

    /// Number of operands an operation with this tag carries (0 or 1).
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Negate | Self::Absolute | Self::Reset => 0,
            Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Root
            | Self::Power
            | Self::Repeat => 1,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// A single recorded step in the op log.
///
/// The operand lives inline in the variant, so an operation can never carry
/// the wrong number of operands for its tag. For [`Operation::Repeat`] the
/// operand is the count the repeat was invoked with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operator", content = "operand", rename_all = "snake_case")]
pub enum Operation {
    Add(f64),
    Subtract(f64),
    Multiply(f64),
    Divide(f64),
    Negate,
    Absolute,
    Root(f64),
    Power(f64),
    Reset,
    Repeat(f64),
}

impl Operation {
    /// The operator tag of this operation.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        match self {
            Self::Add(_) => Operator::Add,
            Self::Subtract(_) => Operator::Subtract,
            Self::Multiply(_) => Operator::Multiply,
            Self::Divide(_) => Operator::Divide,
            Self::Negate => Operator::Negate,
            Self::Absolute => Operator::Absolute,
            Self::Root(_) => Operator::Root,
            Self::Power(_) => Operator::Power,
            Self::Reset => Operator::Reset,
            Self::Repeat(_) => Operator::Repeat,
        }
    }

    /// The operands this operation was applied with, in order.
    #[must_use]
    pub const fn operands(&self) -> &[f64] {
        match self {
            Self::Add(a)
            | Self::Subtract(a)
            | Self::Multiply(a)
            | Self::Divide(a)
            | Self::Root(a)
            | Self::Power(a)
            | Self::Repeat(a) => std::slice::from_ref(a),
            Self::Negate | Self::Absolute | Self::Reset => &[],
        }
    }
}

/// Renders as `"<operator> - [<operands>]"`, e.g. `add - [5]`, `negate - []`.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - [", self.operator())?;
        for (i, operand) in self.operands().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{operand}")?;
        }
        f.write_str("]")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
