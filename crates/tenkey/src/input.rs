//! Mapping from typed characters and key events to calculator intents.
//!
//! The collaborator that owns the real input devices translates its events
//! into [`Intent`] values and feeds them to
//! [`Calculator::apply`](crate::core::Calculator::apply). Nothing here
//! performs I/O.

use crate::core::Operator;

#[cfg(feature = "tui")]
use crossterm::event::{KeyCode, KeyEvent};

/// One user intent; each variant maps to exactly one calculator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Enter a decimal digit (0-9).
    Digit(u8),
    /// Begin or extend the fractional part of the entry.
    DecimalPoint,
    /// Choose a binary operator.
    Operator(Operator),
    /// Complete the pending computation, or repeat the last one.
    Equals,
    /// Reset the session.
    Clear,
    /// Erase the last typed character.
    Backspace,
    /// Negate the current entry.
    ToggleSign,
    /// Divide the current entry by one hundred.
    Percent,
}

impl Intent {
    /// Maps a typed character to its intent, if it has one.
    ///
    /// Digits, `'.'`, `'='`, `'%'`, the ASCII operators `+ - * /`, and the
    /// display symbols `× ÷ −` are recognized; everything else is `None`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '.' => Some(Self::DecimalPoint),
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            _ => Operator::try_from(c).ok().map(Self::Operator),
        }
    }
}

/// Maps terminal key events to calculator intents.
///
/// The keyboard contract: digit keys and `.` enter the numeral, `Enter`
/// and `=` complete it, `Esc` clears, `Backspace` erases, and `+ - * /`
/// choose operators. Unmapped keys produce no intent.
#[cfg(feature = "tui")]
#[derive(Debug, Default)]
pub struct InputHandler;

#[cfg(feature = "tui")]
impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an intent, if it has one.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Option<Intent> {
        match event.code {
            KeyCode::Char(c) => Intent::from_char(c),
            KeyCode::Backspace => Some(Intent::Backspace),
            KeyCode::Esc => Some(Intent::Clear),
            KeyCode::Enter => Some(Intent::Equals),
            _ => None,
        }
    }
}
