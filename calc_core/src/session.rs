//! # Input State Machine
//!
//! [`SessionState`] holds one calculator session and interprets a stream of
//! [`Input`] events into a running calculation. It is owned by whatever hosts
//! the session (a GUI window, a terminal loop, a test) and handed to each
//! transition by `&mut`; there is no process-wide state.
//!
//! ## States
//!
//! The state is implicit in `(operator, should_reset_display)` plus the
//! display text, see [`Phase`]:
//!
//! ```text
//!   Entry ──op──▶ AwaitingOperand ──digit──▶ Operand ──=──▶ Entry (result)
//!                        ▲                      │              │
//!                        └────────op (fold)─────┘              └──÷0──▶ Error
//! ```
//!
//! `Error` is a display value, not a blocking state: the next digit or clear
//! starts a fresh entry.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::input::parse_key_script;
//! use calc_core::session::SessionState;
//!
//! let mut session = SessionState::new();
//! for input in parse_key_script("5+3+2=").unwrap() {
//!     session.apply(input);
//! }
//! assert_eq!(session.display(), "10");
//! ```

use serde::{Deserialize, Serialize};

use crate::arithmetic::Operator;
use crate::display::{format_number, parse_operand, ERROR_DISPLAY, INITIAL_DISPLAY};
use crate::input::Input;

/// Receives the display text after every handled input.
pub trait DisplayRenderer {
    fn render(&mut self, display: &str);
}

/// No-op renderer, for hosts that read [`SessionState::display`] themselves
impl DisplayRenderer for () {
    fn render(&mut self, _display: &str) {}
}

/// Records every frame
impl DisplayRenderer for Vec<String> {
    fn render(&mut self, display: &str) {
        self.push(display.to_string());
    }
}

/// Implicit state of a session, derived from its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Typing the first operand, or showing a finished result
    Entry,
    /// Operator chosen; the next digit starts the right-hand operand
    AwaitingOperand,
    /// Typing the right-hand operand
    Operand,
    /// The last computation failed
    Error,
}

/// One calculator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Operand being typed, or the last result. Never empty.
    pub current_input: String,

    /// Left-hand operand of the pending operation
    pub previous_value: Option<f64>,

    /// Pending operator
    pub operator: Option<Operator>,

    /// Next digit replaces the display instead of appending to it
    pub should_reset_display: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            current_input: INITIAL_DISPLAY.to_string(),
            previous_value: None,
            operator: None,
            should_reset_display: false,
        }
    }
}

impl SessionState {
    /// Start a session showing `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to render
    pub fn display(&self) -> &str {
        &self.current_input
    }

    /// Whether the display is showing the error value
    pub fn is_error(&self) -> bool {
        self.current_input == ERROR_DISPLAY
    }

    pub fn phase(&self) -> Phase {
        if self.is_error() {
            Phase::Error
        } else {
            match (self.operator, self.should_reset_display) {
                (None, _) => Phase::Entry,
                (Some(_), true) => Phase::AwaitingOperand,
                (Some(_), false) => Phase::Operand,
            }
        }
    }

    /// The pending left operand and operator, e.g. `"5 +"`.
    /// Empty when nothing is pending.
    pub fn pending_expression(&self) -> String {
        match (self.previous_value, self.operator) {
            (Some(value), Some(op)) => format!("{} {}", format_number(value), op),
            _ => String::new(),
        }
    }

    /// Run the transition for `input`, then refresh `renderer`.
    pub fn handle<R: DisplayRenderer + ?Sized>(&mut self, input: Input, renderer: &mut R) {
        self.apply(input);
        renderer.render(self.display());
    }

    /// Run the transition for `input` without a renderer.
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Digit(d) => self.handle_digit(d),
            Input::Decimal => self.handle_decimal(),
            Input::Operator(op) => self.handle_operator(op),
            Input::Equals => self.handle_equals(),
            Input::Clear => self.handle_clear(),
            Input::ClearEntry => self.handle_clear_entry(),
            Input::Backspace => self.handle_backspace(),
        }
        tracing::trace!(
            %input,
            display = %self.current_input,
            operator = ?self.operator,
            previous = ?self.previous_value,
            reset = self.should_reset_display,
            "handled input"
        );
    }

    /// Append a digit, or start a new operand after an operator or result.
    /// Anything outside '0'..='9' is ignored.
    pub fn handle_digit(&mut self, digit: char) {
        if let Err(e) = Input::digit(digit) {
            tracing::warn!(error = %e, "digit ignored");
            return;
        }

        if self.should_reset_display {
            self.current_input = digit.to_string();
            self.should_reset_display = false;
        } else if self.current_input == INITIAL_DISPLAY {
            self.current_input = digit.to_string();
        } else {
            self.current_input.push(digit);
        }
    }

    /// Add a decimal point. Repeated presses are ignored.
    pub fn handle_decimal(&mut self) {
        if self.should_reset_display {
            self.current_input = format!("{}.", INITIAL_DISPLAY);
            self.should_reset_display = false;
        } else if !self.current_input.contains('.') {
            self.current_input.push('.');
        }
    }

    /// Select `op`, folding a complete pending operation first so chains
    /// evaluate left to right: `5 + 3 + 2 =` is `(5 + 3) + 2`.
    ///
    /// Pressing a second operator before any digit only replaces the
    /// pending operator.
    pub fn handle_operator(&mut self, op: Operator) {
        if self.is_error() {
            tracing::debug!(operator = %op, "operator ignored while showing error");
            return;
        }

        if self.operator.is_some() && self.previous_value.is_some() && !self.should_reset_display {
            self.handle_equals();
            if self.is_error() {
                return;
            }
        }

        match parse_operand(&self.current_input) {
            Ok(value) => {
                self.previous_value = Some(value);
                self.operator = Some(op);
                self.should_reset_display = true;
            }
            Err(e) => {
                tracing::warn!(error = %e, "operator ignored");
            }
        }
    }

    /// Evaluate the pending operation. No-op when nothing is pending.
    ///
    /// Any arithmetic failure shows [`ERROR_DISPLAY`] and drops the pending
    /// operation; the session itself carries on.
    pub fn handle_equals(&mut self) {
        let (Some(op), Some(lhs)) = (self.operator, self.previous_value) else {
            return;
        };

        let result = parse_operand(&self.current_input).and_then(|rhs| op.apply(lhs, rhs));

        match result {
            Ok(value) => {
                tracing::debug!(lhs, operator = %op, rhs = %self.current_input, value, "evaluated");
                self.current_input = format_number(value);
            }
            Err(e) => {
                if e.is_arithmetic() {
                    tracing::warn!(error = %e, code = e.error_code(), "calculation failed");
                } else {
                    tracing::debug!(error = %e, code = e.error_code(), "right operand is not a number");
                }
                self.current_input = ERROR_DISPLAY.to_string();
            }
        }
        self.operator = None;
        self.previous_value = None;
        self.should_reset_display = true;
    }

    /// Reset everything
    pub fn handle_clear(&mut self) {
        *self = SessionState::default();
    }

    /// Reset only the operand being typed; a pending operation survives.
    pub fn handle_clear_entry(&mut self) {
        self.current_input = INITIAL_DISPLAY.to_string();
        self.should_reset_display = false;
    }

    /// Drop the last character, or show `0` when only one is left.
    ///
    /// The remainder may not be a number (`-2` becomes `-`); an operator
    /// pressed on it is ignored and `=` on it shows `Error`.
    pub fn handle_backspace(&mut self) {
        if self.current_input.chars().count() > 1 {
            self.current_input.pop();
        } else {
            self.current_input = INITIAL_DISPLAY.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_key_script;

    fn run(script: &str) -> SessionState {
        let mut session = SessionState::new();
        for input in parse_key_script(script).unwrap() {
            session.apply(input);
        }
        session
    }

    #[test]
    fn test_initial_state() {
        let session = SessionState::new();
        assert_eq!(session.display(), "0");
        assert_eq!(session.previous_value, None);
        assert_eq!(session.operator, None);
        assert!(!session.should_reset_display);
        assert_eq!(session.phase(), Phase::Entry);
    }

    #[test]
    fn test_addition() {
        assert_eq!(run("5+3=").display(), "8");
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(run("10-3=").display(), "7");
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(run("6×7=").display(), "42");
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let session = run("5÷0=");
        assert_eq!(session.display(), "Error");
        assert!(session.is_error());
        assert_eq!(session.operator, None);
        assert_eq!(session.previous_value, None);
        assert!(session.should_reset_display);
        assert_eq!(session.phase(), Phase::Error);
    }

    #[test]
    fn test_decimal_multiplication() {
        assert_eq!(run("3.14×2=").display(), "6.28");
    }

    #[test]
    fn test_chained_operations() {
        assert_eq!(run("5+3+2=").display(), "10");
        assert_eq!(run("2+3*4=").display(), "20");
        assert_eq!(run("100/4-5=").display(), "20");
    }

    #[test]
    fn test_chain_shows_intermediate_result() {
        let session = run("5+3+");
        assert_eq!(session.display(), "8");
        assert_eq!(session.previous_value, Some(8.0));
        assert_eq!(session.operator, Some(Operator::Add));
        assert_eq!(session.pending_expression(), "8 +");
    }

    #[test]
    fn test_repeated_decimal_ignored() {
        assert_eq!(run("3...5").display(), "3.5");
    }

    #[test]
    fn test_leading_decimal() {
        assert_eq!(run(".5").display(), "0.5");
        assert_eq!(run("0.5").display(), "0.5");
    }

    #[test]
    fn test_leading_zero_replaced() {
        assert_eq!(run("0").display(), "0");
        assert_eq!(run("07").display(), "7");
        assert_eq!(run("00").display(), "0");
    }

    #[test]
    fn test_backspace() {
        assert_eq!(run("<").display(), "0");
        assert_eq!(run("12<").display(), "1");
        assert_eq!(run("12<<").display(), "0");
        assert_eq!(run("3.<").display(), "3");
    }

    #[test]
    fn test_backspace_on_negative_result() {
        let mut session = run("3-5=");
        assert_eq!(session.display(), "-2");
        session.handle_backspace();
        assert_eq!(session.display(), "-");
        session.handle_backspace();
        assert_eq!(session.display(), "0");
    }

    #[test]
    fn test_operator_ignored_on_bare_sign() {
        let mut session = run("3-5=<");
        session.handle_operator(Operator::Add);
        assert_eq!(session.display(), "-");
        assert_eq!(session.operator, None);
        assert_eq!(session.previous_value, None);
    }

    #[test]
    fn test_equals_on_bare_sign_shows_error() {
        let mut session = run("3-5=<");
        session.previous_value = Some(4.0);
        session.operator = Some(Operator::Add);
        session.handle_equals();
        assert_eq!(session.display(), "Error");
        assert_eq!(session.operator, None);
    }

    #[test]
    fn test_backspace_drops_one_exponent_char() {
        let mut session = SessionState::new();
        session.current_input = "1e+21".to_string();
        session.handle_backspace();
        assert_eq!(session.display(), "1e+2");
        session.handle_backspace();
        assert_eq!(session.display(), "1e+");
    }

    #[test]
    fn test_backspace_on_error() {
        let mut session = run("5/0=");
        session.handle_backspace();
        assert_eq!(session.display(), "Erro");
        assert!(!session.is_error());

        session.handle_digit('7');
        assert_eq!(session.display(), "7");
    }

    #[test]
    fn test_non_digit_ignored() {
        let mut session = run("12");
        session.apply(Input::Digit('a'));
        session.handle_digit('.');
        assert_eq!(session.display(), "12");

        let input: Input = serde_json::from_str(r#"{"type":"digit","value":"x"}"#).unwrap();
        session.apply(input);
        assert_eq!(session.display(), "12");
    }

    #[test]
    fn test_tied_result_rounds_away_from_zero() {
        assert_eq!(run("0.00048828125*1=").display(), "0.0004882813");
        assert_eq!(run(".0625*.0078125=").display(), "0.0004882813");
    }

    #[test]
    fn test_digit_after_error_starts_fresh() {
        let mut session = run("5/0=");
        session.handle_digit('4');
        assert_eq!(session.display(), "4");
        assert_eq!(session.phase(), Phase::Entry);
        session.handle_operator(Operator::Add);
        session.handle_digit('1');
        session.handle_equals();
        assert_eq!(session.display(), "5");
    }

    #[test]
    fn test_decimal_after_error() {
        assert_eq!(run("5/0=.").display(), "0.");
    }

    #[test]
    fn test_operator_ignored_on_error() {
        let session = run("5/0=+");
        assert_eq!(session.display(), "Error");
        assert_eq!(session.operator, None);
        assert_eq!(session.previous_value, None);
    }

    #[test]
    fn test_chain_into_division_by_zero() {
        let session = run("8/0+");
        assert_eq!(session.display(), "Error");
        assert_eq!(session.operator, None);
        assert_eq!(session.previous_value, None);
    }

    #[test]
    fn test_overflow_shows_error() {
        let mut session = SessionState::new();
        session.current_input = "1e+308".to_string();
        session.handle_operator(Operator::Multiply);
        session.handle_digit('1');
        session.handle_digit('0');
        session.handle_equals();
        assert_eq!(session.display(), "Error");
    }

    #[test]
    fn test_double_operator_replaces_pending() {
        let session = run("5+-");
        assert_eq!(session.operator, Some(Operator::Subtract));
        assert_eq!(session.previous_value, Some(5.0));
        assert_eq!(session.display(), "5");
        assert_eq!(run("5+-3=").display(), "2");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let session = run("42=");
        assert_eq!(session.display(), "42");
        assert!(!session.should_reset_display);
    }

    #[test]
    fn test_equals_twice_keeps_result() {
        assert_eq!(run("5+3==").display(), "8");
    }

    #[test]
    fn test_operator_after_result_continues() {
        assert_eq!(run("5+3=*2=").display(), "16");
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        assert_eq!(run("5+3=9").display(), "9");
    }

    #[test]
    fn test_floating_point_noise_suppressed() {
        assert_eq!(run(".1+.2=").display(), "0.3");
    }

    #[test]
    fn test_clear() {
        let session = run("5+3C");
        assert_eq!(session, SessionState::new());
    }

    #[test]
    fn test_clear_entry_keeps_pending_operation() {
        let session = run("5+3E");
        assert_eq!(session.display(), "0");
        assert_eq!(session.operator, Some(Operator::Add));
        assert_eq!(session.previous_value, Some(5.0));
        assert!(!session.should_reset_display);

        assert_eq!(run("5+3E2=").display(), "7");
    }

    #[test]
    fn test_clear_entry_then_operator_folds() {
        // 5 + CE leaves "0" as the right operand, so the fold yields 5
        let session = run("5+E*");
        assert_eq!(session.display(), "5");
        assert_eq!(session.operator, Some(Operator::Multiply));
        assert_eq!(session.previous_value, Some(5.0));
    }

    #[test]
    fn test_phases() {
        assert_eq!(run("5").phase(), Phase::Entry);
        assert_eq!(run("5+").phase(), Phase::AwaitingOperand);
        assert_eq!(run("5+3").phase(), Phase::Operand);
        assert_eq!(run("5+3=").phase(), Phase::Entry);
    }

    #[test]
    fn test_handle_renders_every_transition() {
        let mut session = SessionState::new();
        let mut frames: Vec<String> = Vec::new();
        for input in parse_key_script("5+3=").unwrap() {
            session.handle(input, &mut frames);
        }
        assert_eq!(frames, vec!["5", "5", "3", "8"]);
    }

    #[test]
    fn test_serialization() {
        let session = run("5+");
        let json = serde_json::to_string(&session).unwrap();
        let parsed: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
        assert!(json.contains(r#""operator":"add""#));
    }
}
