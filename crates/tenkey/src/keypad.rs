//! Layout model for the standard on-screen keypad.
//!
//! Pure data: each button carries its face label and the [`Intent`] it
//! produces. Hit-testing pointer coordinates and drawing the grid belong
//! to the rendering collaborator.

use crate::core::Operator;
use crate::input::Intent;

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The character on the button face.
    pub label: char,
    /// The intent pressing the button produces.
    pub intent: Intent,
}

impl KeypadButton {
    fn digit(d: u8) -> Self {
        Self {
            label: char::from_digit(u32::from(d), 10).unwrap_or('?'),
            intent: Intent::Digit(d),
        }
    }

    fn operator(op: Operator) -> Self {
        Self {
            label: op.symbol().chars().next().unwrap_or('?'),
            intent: Intent::Operator(op),
        }
    }

    fn action(label: char, intent: Intent) -> Self {
        Self { label, intent }
    }
}

/// The standard 4-column, 5-row keypad grid:
///
/// ```text
/// [ C ] [ ± ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ ⌫ ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C ± % ÷
            KeypadButton::action('C', Intent::Clear),
            KeypadButton::action('±', Intent::ToggleSign),
            KeypadButton::action('%', Intent::Percent),
            KeypadButton::operator(Operator::Divide),
            // Row 1: 7 8 9 ×
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Multiply),
            // Row 2: 4 5 6 −
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Subtract),
            // Row 3: 1 2 3 +
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Add),
            // Row 4: 0 . ⌫ =
            KeypadButton::digit(0),
            KeypadButton::action('.', Intent::DecimalPoint),
            KeypadButton::action('⌫', Intent::Backspace),
            KeypadButton::action('=', Intent::Equals),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions as (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by row-major index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by grid position.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its face label.
    #[must_use]
    pub fn find_by_label(&self, label: char) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Iterates over all buttons in row-major order.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Iterates over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(move |(i, btn)| ((i / self.cols, i % self.cols), btn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_shape() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 20);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_default() {
        assert_eq!(Keypad::default().button_count(), 20);
    }

    #[test]
    fn test_row_0() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().label, 'C');
        assert_eq!(keypad.get_button_at(0, 1).unwrap().label, '±');
        assert_eq!(keypad.get_button_at(0, 2).unwrap().label, '%');
        assert_eq!(keypad.get_button_at(0, 3).unwrap().label, '÷');
    }

    #[test]
    fn test_digit_rows() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(1, 0).unwrap().label, '7');
        assert_eq!(keypad.get_button_at(2, 1).unwrap().label, '5');
        assert_eq!(keypad.get_button_at(3, 2).unwrap().label, '3');
        assert_eq!(keypad.get_button_at(4, 0).unwrap().label, '0');
    }

    #[test]
    fn test_bottom_row() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.get_button_at(4, 1).unwrap().intent,
            Intent::DecimalPoint
        );
        assert_eq!(
            keypad.get_button_at(4, 2).unwrap().intent,
            Intent::Backspace
        );
        assert_eq!(keypad.get_button_at(4, 3).unwrap().intent, Intent::Equals);
    }

    #[test]
    fn test_operator_column() {
        let keypad = Keypad::new();
        for (row, op) in [
            (0, Operator::Divide),
            (1, Operator::Multiply),
            (2, Operator::Subtract),
            (3, Operator::Add),
        ] {
            assert_eq!(
                keypad.get_button_at(row, 3).unwrap().intent,
                Intent::Operator(op)
            );
        }
    }

    #[test]
    fn test_get_button_at_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_find_by_label() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.find_by_label('=').unwrap().intent,
            Intent::Equals
        );
        assert_eq!(
            keypad.find_by_label('±').unwrap().intent,
            Intent::ToggleSign
        );
        assert!(keypad.find_by_label('X').is_none());
    }

    #[test]
    fn test_every_digit_present() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(
                keypad
                    .buttons()
                    .any(|b| b.intent == Intent::Digit(d)),
                "missing digit {d}"
            );
        }
    }

    #[test]
    fn test_labels_unique() {
        let keypad = Keypad::new();
        let mut seen = std::collections::HashSet::new();
        for btn in keypad.buttons() {
            assert!(seen.insert(btn.label), "duplicate label {:?}", btn.label);
        }
    }

    #[test]
    fn test_positions_cover_grid() {
        let keypad = Keypad::new();
        let positions: Vec<_> = keypad.buttons_with_positions().map(|(pos, _)| pos).collect();
        assert_eq!(positions.len(), 20);
        assert_eq!(positions[0], (0, 0));
        assert_eq!(positions[19], (4, 3));
    }
}
