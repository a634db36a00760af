//! # Input Events
//!
//! The abstract events a front end feeds into a
//! [`SessionState`](crate::session::SessionState). Button clicks and key
//! presses are decoded into an [`Input`] by the UI layer; the state machine
//! never sees a UI-specific event type.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::input::{parse_key_script, Input};
//! use calc_core::arithmetic::Operator;
//!
//! assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
//! assert_eq!(Input::from_key("/"), Some(Input::Operator(Operator::Divide)));
//!
//! let inputs = parse_key_script("5 + 3 =").unwrap();
//! assert_eq!(inputs.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::arithmetic::Operator;
use crate::errors::{CalcError, CalcResult};

/// A single user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Input {
    /// A digit '0'..='9'
    Digit(char),
    /// The decimal point
    Decimal,
    /// One of the four binary operators
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset the whole session
    Clear,
    /// Reset only the operand being typed
    ClearEntry,
    /// Drop the last typed character
    Backspace,
}

impl Input {
    /// Build a digit event, rejecting anything outside '0'..='9'.
    pub fn digit(c: char) -> CalcResult<Input> {
        if c.is_ascii_digit() {
            Ok(Input::Digit(c))
        } else {
            Err(CalcError::InvalidDigit { value: c })
        }
    }

    /// Map a keyboard key name onto an input.
    ///
    /// Key names follow the DOM `KeyboardEvent.key` convention, which is also
    /// what most toolkits hand back for named keys: single characters for
    /// printable keys, `Enter`, `Escape`, `Backspace`, `Delete` otherwise.
    /// Operator glyphs (`x`, `×`, `÷`, `−`) are accepted alongside the ASCII
    /// symbols. Returns `None` for keys the calculator ignores.
    pub fn from_key(key: &str) -> Option<Input> {
        match key {
            "Enter" | "=" => Some(Input::Equals),
            "." => Some(Input::Decimal),
            "Escape" | "c" | "C" => Some(Input::Clear),
            "Backspace" => Some(Input::Backspace),
            "Delete" => Some(Input::ClearEntry),
            "+" => Some(Input::Operator(Operator::Add)),
            "-" => Some(Input::Operator(Operator::Subtract)),
            "*" => Some(Input::Operator(Operator::Multiply)),
            "/" => Some(Input::Operator(Operator::Divide)),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Some(Input::Digit(c)),
                    (Some(c), None) => Operator::from_symbol(c).map(Input::Operator),
                    _ => None,
                }
            }
        }
    }

    /// Decode one character of a key script.
    ///
    /// Besides digits, `.`, `=` and the operator symbols, `C` clears,
    /// `E` clears the entry and `<` is backspace.
    pub fn from_script_char(c: char) -> CalcResult<Input> {
        if c.is_ascii_digit() {
            return Ok(Input::Digit(c));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return Ok(Input::Operator(op));
        }
        match c {
            '.' => Ok(Input::Decimal),
            '=' => Ok(Input::Equals),
            'C' | 'c' => Ok(Input::Clear),
            'E' | 'e' => Ok(Input::ClearEntry),
            '<' => Ok(Input::Backspace),
            other => Err(CalcError::unknown_key(other.to_string())),
        }
    }

    /// Caption for the matching keypad button
    pub fn label(&self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::Decimal => ".".to_string(),
            Input::Operator(op) => op.display_symbol().to_string(),
            Input::Equals => "=".to_string(),
            Input::Clear => "C".to_string(),
            Input::ClearEntry => "CE".to_string(),
            Input::Backspace => "⌫".to_string(),
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Decode a compact key script such as `"3.14*2="` into inputs.
/// Whitespace is ignored.
///
/// # Errors
///
/// [`CalcError::UnknownKey`] for the first character with no binding.
pub fn parse_key_script(script: &str) -> CalcResult<Vec<Input>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Input::from_script_char)
        .collect()
}
