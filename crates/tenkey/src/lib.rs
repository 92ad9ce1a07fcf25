//! tenkey: the arithmetic-entry state machine behind an on-screen
//! calculator.
//!
//! The crate turns a stream of discrete user intents (digit pressed,
//! operator pressed, equals, clear, sign toggle, percent, backspace) into
//! a running display value and bounded-precision results, tracking enough
//! history for operator chaining and repeat-equals. It performs no I/O:
//! an embedding collaborator translates device events into [`Intent`]
//! values and renders the exposed display and history strings after each
//! operation.
//!
//! Every operation is total. Division by zero becomes the `"Error"`
//! display value, malformed numerals parse as zero, and out-of-sequence
//! presses are defined no-ops; there is no error channel to handle.
//!
//! # Example
//!
//! ```rust
//! use tenkey::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for c in "6+2*3=".chars() {
//!     if let Some(intent) = Intent::from_char(c) {
//!         calc.apply(intent);
//!     }
//! }
//! // Chained operators evaluate left to right, no precedence.
//! assert_eq!(calc.display_text(), "24");
//! assert_eq!(calc.tape().lines(), vec!["6 + 2 = 8", "8 × 3 = 24"]);
//! ```
//!
//! [`Intent`]: input::Intent

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod input;
pub mod keypad;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::engine::Calculator;
    pub use crate::core::format;
    pub use crate::core::tape::{Tape, TapeEntry};
    pub use crate::core::{Operator, UnknownOperator};
    pub use crate::input::Intent;
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::input::InputHandler;
}
