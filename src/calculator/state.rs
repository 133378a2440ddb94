//! The calculator input state machine.
//!
//! A [`CalculatorState`] is driven one button press at a time. Operators are
//! evaluated strictly left to right: choosing a second operator before `=`
//! folds the pending operation into the display immediately. There is no
//! precedence and no error state; dividing by zero shows `Infinity` or `NaN`.

use super::button::{Button, ButtonParseError, Digit};
use super::format::{format_number, parse_number};
use super::operator::Operator;

/// Display text of a fresh calculator.
const INITIAL_DISPLAY: &str = "0";

/// Operation waiting for its right-hand operand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pending {
    /// No operator chosen since the last clear or `=`.
    #[default]
    Idle,
    /// An operator was chosen; `previous` is its left-hand operand.
    OperandPending { operator: Operator, previous: f64 },
}

/// Everything the calculator remembers between presses.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    display: String,
    pending: Pending,
    awaiting_new_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: Pending::Idle,
            awaiting_new_operand: false,
        }
    }

    /// The raw display text, before any on-screen rendering.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Pending {
        self.pending
    }

    /// The stored left-hand operand, if an operator is pending.
    pub fn previous_value(&self) -> Option<f64> {
        match self.pending {
            Pending::Idle => None,
            Pending::OperandPending { previous, .. } => Some(previous),
        }
    }

    pub fn pending_operation(&self) -> Option<Operator> {
        match self.pending {
            Pending::Idle => None,
            Pending::OperandPending { operator, .. } => Some(operator),
        }
    }

    /// Whether the next digit starts a new number instead of extending the
    /// current one.
    pub fn is_awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// Apply a single button press.
    pub fn press(&mut self, button: Button) {
        tracing::trace!(button = %button, display = %self.display, "press");

        match button {
            Button::Digit(digit) => self.input_digit(digit),
            Button::DecimalPoint => self.input_decimal_point(),
            Button::Clear => self.clear(),
            Button::ToggleSign => self.toggle_sign(),
            Button::Percentage => self.percentage(),
            Button::Operator(op) => self.choose_operator(op),
            Button::Equals => self.equals(),
        }
    }

    /// Consume the state and return it after pressing `button`.
    pub fn pressed(mut self, button: Button) -> Self {
        self.press(button);
        self
    }

    pub fn input_digit(&mut self, digit: Digit) {
        if self.awaiting_new_operand {
            self.display = digit.label().to_string();
            self.awaiting_new_operand = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display = digit.label().to_string();
        } else {
            self.display.push_str(digit.label());
        }
    }

    /// Add a decimal point. Repeated presses have no further effect.
    pub fn input_decimal_point(&mut self) {
        if self.awaiting_new_operand {
            self.display = "0.".to_string();
            self.awaiting_new_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn toggle_sign(&mut self) {
        let value = parse_number(&self.display);
        self.display = format_number(-value);
    }

    pub fn percentage(&mut self) {
        let value = parse_number(&self.display);
        self.display = format_number(value / 100.0);
    }

    /// Choose the next operator, folding any pending operation first.
    pub fn choose_operator(&mut self, operator: Operator) {
        let input = parse_number(&self.display);

        let previous = match self.pending {
            Pending::Idle => input,
            Pending::OperandPending {
                operator: pending,
                previous,
            } => {
                let result = pending.apply(previous, input);
                self.display = format_number(result);
                result
            }
        };

        self.pending = Pending::OperandPending { operator, previous };
        self.awaiting_new_operand = true;
    }

    /// Resolve the pending operation. Does nothing when none is pending.
    pub fn equals(&mut self) {
        let Pending::OperandPending { operator, previous } = self.pending else {
            return;
        };

        let input = parse_number(&self.display);
        self.display = format_number(operator.apply(previous, input));
        self.pending = Pending::Idle;
        self.awaiting_new_operand = true;
    }
}

/// Run a sequence of button labels through a fresh calculator.
///
/// Every label is parsed before any is pressed, so an unknown label leaves
/// nothing half-applied.
pub fn press_labels<S: AsRef<str>>(labels: &[S]) -> Result<CalculatorState, ButtonParseError> {
    let buttons = labels
        .iter()
        .map(|label| Button::from_label(label.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(buttons
        .into_iter()
        .fold(CalculatorState::new(), CalculatorState::pressed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(labels: &[&str]) -> CalculatorState {
        press_labels(labels).unwrap()
    }

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.pending(), Pending::Idle);
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.pending_operation(), None);
        assert!(!state.is_awaiting_new_operand());
    }

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(run(&["1", "2", "3"]).display(), "123");
        assert_eq!(run(&["9", "0", "0", "1"]).display(), "9001");
    }

    #[test]
    fn test_leading_zero_replaced() {
        assert_eq!(run(&["0"]).display(), "0");
        assert_eq!(run(&["0", "0", "7"]).display(), "7");
    }

    #[test]
    fn test_display_has_no_length_bound() {
        let labels = ["9"; 40];
        assert_eq!(run(&labels).display(), "9".repeat(40));
    }

    #[test]
    fn test_decimal_point_idempotent() {
        let once = run(&["3", "."]);
        let twice = run(&["3", ".", "."]);
        assert_eq!(once, twice);
        assert_eq!(twice.display(), "3.");
        assert_eq!(run(&["3", ".", "1", ".", "4"]).display(), "3.14");
    }

    #[test]
    fn test_decimal_point_starts_new_operand() {
        let state = run(&["5", "+", "."]);
        assert_eq!(state.display(), "0.");
        assert!(!state.is_awaiting_new_operand());
        assert_eq!(run(&["5", "+", ".", "5", "="]).display(), "5.5");
    }

    #[test]
    fn test_clear_resets_everything() {
        for labels in [
            &["AC"][..],
            &["7", "+", "3"][..],
            &["5", "÷", "0", "="][..],
            &["1", ".", "5", "×"][..],
        ] {
            let state = run(labels).pressed(Button::Clear);
            assert_eq!(state, CalculatorState::new());
        }
    }

    #[test]
    fn test_toggle_sign() {
        assert_eq!(run(&["4", "2", "±"]).display(), "-42");
        assert_eq!(run(&["4", "2", "±", "±"]).display(), "42");
    }

    #[test]
    fn test_toggle_sign_on_zero_has_no_negative_zero() {
        assert_eq!(run(&["±"]).display(), "0");
        assert_eq!(run(&["0", ".", "±"]).display(), "0");
    }

    #[test]
    fn test_toggle_sign_keeps_other_fields() {
        let before = run(&["7", "+"]);
        let after = before.clone().pressed(Button::ToggleSign);
        assert_eq!(after.display(), "-7");
        assert_eq!(after.pending(), before.pending());
        assert_eq!(
            after.is_awaiting_new_operand(),
            before.is_awaiting_new_operand()
        );
    }

    #[test]
    fn test_percentage() {
        assert_eq!(run(&["5", "0", "%"]).display(), "0.5");
        assert_eq!(run(&["5", "%"]).display(), "0.05");
    }

    #[test]
    fn test_percentage_keeps_other_fields() {
        let before = run(&["7", "+"]);
        let after = before.clone().pressed(Button::Percentage);
        assert_eq!(after.display(), "0.07");
        assert_eq!(after.pending(), before.pending());
        assert_eq!(
            after.is_awaiting_new_operand(),
            before.is_awaiting_new_operand()
        );
    }

    #[test]
    fn test_operator_stores_operand() {
        let state = run(&["8", "×"]);
        assert_eq!(state.display(), "8");
        assert_eq!(state.previous_value(), Some(8.0));
        assert_eq!(state.pending_operation(), Some(Operator::Multiply));
        assert!(state.is_awaiting_new_operand());
    }

    #[test]
    fn test_digit_after_operator_starts_new_operand() {
        let state = run(&["8", "×", "3"]);
        assert_eq!(state.display(), "3");
        assert!(!state.is_awaiting_new_operand());
    }

    #[test]
    fn test_equals_uses_displayed_operand() {
        assert_eq!(run(&["5", "+", "="]).display(), "10");
    }

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(run(&["1", "2", "+", "3", "0", "="]).display(), "42");
        assert_eq!(run(&["9", "−", "1", "2", "="]).display(), "-3");
        assert_eq!(run(&["6", "×", "7", "="]).display(), "42");
        assert_eq!(run(&["1", "÷", "4", "="]).display(), "0.25");
    }

    #[test]
    fn test_chained_operators_fold() {
        let state = run(&["7", "+", "3", "+"]);
        assert_eq!(state.display(), "10");
        assert_eq!(state.previous_value(), Some(10.0));
        assert_eq!(state.pending_operation(), Some(Operator::Add));
        assert!(state.is_awaiting_new_operand());
    }

    #[test]
    fn test_left_to_right_without_precedence() {
        assert_eq!(run(&["2", "+", "3", "×", "4", "="]).display(), "20");
    }

    #[test]
    fn test_switching_operator_folds_displayed_value() {
        // The second operator folds 7 + 7 before switching to subtraction.
        let state = run(&["7", "+", "−"]);
        assert_eq!(state.display(), "14");
        assert_eq!(state.pending_operation(), Some(Operator::Subtract));
    }

    #[test]
    fn test_equals_clears_pending() {
        let state = run(&["7", "+", "3", "="]);
        assert_eq!(state.display(), "10");
        assert_eq!(state.pending(), Pending::Idle);
        assert!(state.is_awaiting_new_operand());
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let before = run(&["4", "2"]);
        let after = before.clone().pressed(Button::Equals);
        assert_eq!(before, after);
    }

    #[test]
    fn test_repeated_equals_is_noop() {
        let once = run(&["7", "+", "3", "="]);
        let twice = once.clone().pressed(Button::Equals);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_digit_after_equals_starts_new_number() {
        assert_eq!(run(&["7", "+", "3", "=", "5"]).display(), "5");
    }

    #[test]
    fn test_operator_after_equals_continues_from_result() {
        assert_eq!(run(&["7", "+", "3", "=", "×", "2", "="]).display(), "20");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(run(&["5", "÷", "0", "="]).display(), "Infinity");
        assert_eq!(run(&["5", "±", "÷", "0", "="]).display(), "-Infinity");
        assert_eq!(run(&["0", "÷", "0", "="]).display(), "NaN");
    }

    #[test]
    fn test_infinity_keeps_flowing_through_operators() {
        let state = run(&["5", "÷", "0", "=", "+", "1", "="]);
        assert_eq!(state.display(), "Infinity");
    }

    #[test]
    fn test_equals_operator_resolves_to_right_operand() {
        let mut state = run(&["4"]);
        state.choose_operator(Operator::Equals);
        state.input_digit(digit(9));
        state.equals();
        assert_eq!(state.display(), "9");
    }

    #[test]
    fn test_floating_point_result_shown_as_is() {
        assert_eq!(
            run(&["0", ".", "1", "+", "0", ".", "2", "="]).display(),
            "0.30000000000000004"
        );
    }

    #[test]
    fn test_press_labels_rejects_unknown() {
        let err = press_labels(&["1", "+", "sqrt"]).unwrap_err();
        assert_eq!(err, ButtonParseError("sqrt".to_string()));
    }
}
