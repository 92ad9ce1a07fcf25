//! The calculator session state machine.
//!
//! One method per user intent. Every operation is synchronous and total:
//! out-of-sequence presses (equals with nothing pending, a second decimal
//! point, backspace with nothing typed) are defined no-ops, and invalid
//! arithmetic becomes the `"Error"` display value rather than a Rust error.
//! There is no error-signaling channel anywhere in this type.

use tracing::trace;

use crate::core::format;
use crate::core::tape::Tape;
use crate::core::Operator;
use crate::input::Intent;

/// Arithmetic-entry state machine behind one calculator session.
///
/// The display string is always a syntactically valid (possibly partial)
/// decimal numeral and never empty; `"0"` when no entry has begun. One
/// instance serves one user's serialized input stream; wrap it in a mutex
/// yourself if you need to share it across threads.
///
/// # Example
///
/// ```rust
/// use tenkey::prelude::*;
///
/// let mut calc = Calculator::new();
/// calc.digit(3);
/// calc.operator(Operator::Add);
/// calc.digit(4);
/// calc.equals();
/// assert_eq!(calc.display_text(), "7");
///
/// // Repeat-equals re-applies the last operation.
/// calc.equals();
/// assert_eq!(calc.display_text(), "11");
/// ```
#[derive(Debug)]
pub struct Calculator {
    /// Exact characters currently shown; never empty.
    display: String,
    /// Left-hand operand of the in-progress or last completed operation.
    first_operand: Option<f64>,
    /// Operator awaiting its right-hand operand.
    pending_op: Option<Operator>,
    /// True between an operator press and the first digit of the next
    /// operand; decides whether the next digit replaces or appends.
    awaiting_second: bool,
    /// Operator and right-hand operand of the last completed equals,
    /// kept together so repeat-equals memory is set and cleared atomically.
    repeat: Option<(Operator, f64)>,
    /// Completed computations, for display and recall.
    tape: Tape,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a fresh session showing `"0"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            first_operand: None,
            pending_op: None,
            awaiting_second: false,
            repeat: None,
            tape: Tape::new(),
        }
    }

    /// Creates a fresh session with a custom tape capacity.
    #[must_use]
    pub fn with_tape_capacity(max_entries: usize) -> Self {
        Self {
            tape: Tape::with_capacity(max_entries),
            ..Self::new()
        }
    }

    // ===== Read accessors =====

    /// The raw display string as stored (untruncated).
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The left-hand operand, if one has been accumulated.
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// The operator awaiting its right-hand operand, if any.
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_op
    }

    /// True while the next digit starts a new entry instead of appending.
    #[must_use]
    pub fn awaiting_second_operand(&self) -> bool {
        self.awaiting_second
    }

    /// The tape of completed computations.
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    // ===== Entry operations =====

    /// Enters one decimal digit. Values above 9 are ignored.
    pub fn digit(&mut self, d: u8) {
        if d > 9 {
            return;
        }
        let ch = char::from(b'0' + d);
        if self.awaiting_second {
            self.display.clear();
            self.display.push(ch);
            self.awaiting_second = false;
        } else if self.display == "0" {
            self.display.clear();
            self.display.push(ch);
        } else {
            self.display.push(ch);
        }
    }

    /// Begins the fractional part of the entry.
    ///
    /// Idempotent: a second press while the entry already contains a
    /// point is a no-op.
    pub fn decimal_point(&mut self) {
        if self.awaiting_second {
            self.display = "0.".to_string();
            self.awaiting_second = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Resets every session field to its initial value.
    ///
    /// The tape survives; see [`Calculator::clear_all`].
    pub fn clear(&mut self) {
        trace!("session cleared");
        self.display = "0".to_string();
        self.first_operand = None;
        self.pending_op = None;
        self.awaiting_second = false;
        self.repeat = None;
    }

    /// Resets the session and empties the tape.
    pub fn clear_all(&mut self) {
        self.clear();
        self.tape.clear();
    }

    /// Erases the last typed character, flooring at `"0"`.
    ///
    /// A no-op while awaiting the second operand (nothing has been typed
    /// yet); a lone digit, or a sign plus one digit, collapses to `"0"`.
    pub fn backspace(&mut self) {
        if self.awaiting_second {
            return;
        }
        let len = self.display.chars().count();
        if len <= 1 || (len == 2 && self.display.starts_with('-')) {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
    }

    /// Negates the current entry. `"0"` stays unsigned.
    pub fn toggle_sign(&mut self) {
        if self.display == "0" {
            return;
        }
        if let Some(stripped) = self.display.strip_prefix('-') {
            self.display = stripped.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    /// Replaces the entry with one hundredth of its value.
    pub fn percent(&mut self) {
        let value = format::parse(&self.display) / 100.0;
        self.display = format::render(value);
    }

    /// Chooses the operator for the next binary operation.
    ///
    /// Pressing an operator while one is already pending and no digit of
    /// the second operand has been typed replaces the pending operator and
    /// touches nothing else. Otherwise a previously completed pair computes
    /// first (left-to-right chaining, no precedence), and the fresh chain
    /// invalidates repeat-equals memory.
    pub fn operator(&mut self, op: Operator) {
        let input_value = format::parse(&self.display);

        if self.pending_op.is_some() && self.awaiting_second {
            self.pending_op = Some(op);
            return;
        }

        match (self.first_operand, self.pending_op) {
            (None, _) => self.first_operand = Some(input_value),
            (Some(first), Some(pending)) => {
                let result = self.compute(first, pending, input_value);
                self.first_operand = Some(result);
                self.display = format::render(result);
            }
            // Operator pressed after equals: the accumulated result stays
            // as the left operand.
            (Some(_), None) => {}
        }

        self.pending_op = Some(op);
        self.awaiting_second = true;
        self.repeat = None;
    }

    /// Completes the pending operation, or repeats the last one.
    ///
    /// With an operator pending, the typed entry becomes the right-hand
    /// operand and is cached for repeat-equals. With none pending but a
    /// completed equals behind us, the cached operator and operand apply
    /// to the current value. With neither, this is a no-op.
    pub fn equals(&mut self) {
        let current = format::parse(&self.display);

        let (a, op, b) = if let Some(op) = self.pending_op {
            let a = self.first_operand.unwrap_or(0.0);
            self.repeat = Some((op, current));
            (a, op, current)
        } else if let Some((op, operand)) = self.repeat {
            (current, op, operand)
        } else {
            return;
        };

        let result = self.compute(a, op, b);
        self.display = format::render(result);
        self.first_operand = Some(result);
        self.pending_op = None;
        // A digit typed after equals starts a brand-new entry.
        self.awaiting_second = true;
    }

    /// Dispatches one user intent to its operation.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Digit(d) => self.digit(d),
            Intent::DecimalPoint => self.decimal_point(),
            Intent::Operator(op) => self.operator(op),
            Intent::Equals => self.equals(),
            Intent::Clear => self.clear(),
            Intent::Backspace => self.backspace(),
            Intent::ToggleSign => self.toggle_sign(),
            Intent::Percent => self.percent(),
        }
    }

    fn compute(&mut self, a: f64, op: Operator, b: f64) -> f64 {
        let result = op.apply(a, b);
        trace!(a, b, op = op.symbol(), result, "computed");
        if result.is_finite() {
            let expression =
                format!("{} {} {}", format::render(a), op.symbol(), format::render(b));
            self.tape.record(&expression, result);
        }
        result
    }

    // ===== Derived views =====

    /// The display string capped for presentation.
    #[must_use]
    pub fn display_text(&self) -> String {
        format::truncate_for_view(&self.display)
    }

    /// The history line above the display: accumulated operand, pending
    /// operator symbol, and the typed second operand once it exists.
    #[must_use]
    pub fn history_text(&self) -> String {
        let mut text = String::new();
        if let Some(first) = self.first_operand {
            text.push_str(&format::truncate_for_view(&format::render(first)));
        }
        if let Some(op) = self.pending_op {
            text.push(' ');
            text.push_str(op.symbol());
            text.push(' ');
            if !self.awaiting_second {
                text.push_str(&format::truncate_for_view(&self.display));
            }
        }
        text.trim().to_string()
    }
}
