//! Core entry engine: operator set, session state machine, display
//! formatting, and the computation tape.

pub mod engine;
pub mod format;
pub mod tape;

pub use engine::Calculator;
pub use tape::{Tape, TapeEntry};

use std::str::FromStr;

/// Error returned when a character or string does not name an operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} does not name a calculator operator")]
pub struct UnknownOperator(String);

/// The closed set of binary operators the entry engine understands.
///
/// The engine dispatches on this enum exhaustively; there is no fallback
/// arm for an unrecognized operator because none is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`−`)
    Subtract,
    /// Multiplication (`×`)
    Multiply,
    /// Division (`÷`)
    Divide,
}

impl Operator {
    /// Returns the display symbol used in the history line and on keypads.
    ///
    /// Subtraction renders as U+2212 MINUS SIGN, not the ASCII hyphen used
    /// for typed input.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{00d7}",
            Self::Divide => "\u{00f7}",
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division by zero yields NaN rather than signaling; every finite
    /// result is rounded to the display precision bound so binary
    /// floating-point artifacts never reach the display (`0.1 + 0.2`
    /// computes to a value that renders as `0.3`).
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        let raw = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return f64::NAN;
                }
                a / b
            }
        };
        format::round(raw)
    }
}

impl TryFrom<char> for Operator {
    type Error = UnknownOperator;

    /// Accepts both the ASCII keyboard characters and the display symbols.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' | '\u{2212}' => Ok(Self::Subtract),
            '*' | '\u{00d7}' => Ok(Self::Multiply),
            '/' | '\u{00f7}' => Ok(Self::Divide),
            _ => Err(UnknownOperator(c.to_string())),
        }
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(UnknownOperator(s.to_owned())),
        }
    }
}
