//! # Arithmetic Engine
//!
//! Stateless four-function arithmetic with fixed-precision rounding.
//!
//! Every result is rounded to [`DECIMAL_PLACES`] decimal places before it is
//! handed back. That hides binary floating-point representation noise
//! (`0.1 + 0.2` comes back as exactly `0.3`) while keeping far more precision
//! than a person will ever type into a calculator.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::arithmetic::{add, divide, Operator};
//! use calc_core::errors::CalcError;
//!
//! assert_eq!(add(0.1, 0.2), 0.3);
//! assert_eq!(divide(5.0, 0.0), Err(CalcError::DivisionByZero));
//! assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Number of decimal places every result is rounded to
pub const DECIMAL_PLACES: usize = 10;

/// Digits needed to print any finite f64 exactly (2^-1074 is the smallest subnormal)
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round to [`DECIMAL_PLACES`] places.
///
/// Goes through a fixed-point decimal string rather than scaling by `1e10`,
/// so large magnitudes don't pick up error from the multiply/divide pair.
/// A value exactly halfway between two results rounds away from zero
/// (`0.00048828125` -> `0.0004882813`). Non-finite values pass through
/// unchanged.
pub fn round_to_precision(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let mut fixed = format!("{:.*}", DECIMAL_PLACES, value);
    if is_exact_tie(value) {
        let rounded: f64 = fixed.parse().unwrap_or(value);
        // Formatting breaks ties to even; push toward zero results outward
        if rounded.abs() < value.abs() {
            fixed = increment_last_digit(&fixed);
        }
    }
    fixed.parse().unwrap_or(value)
}

/// True when the exact decimal expansion of `value` is `5` followed only by
/// zeros past [`DECIMAL_PLACES`].
fn is_exact_tie(value: f64) -> bool {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    match fraction.get(DECIMAL_PLACES..) {
        Some(tail) => tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0'),
        None => false,
    }
}

/// Add one unit in the last place of a decimal string, away from zero.
fn increment_last_digit(fixed: &str) -> String {
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };

    let mut out: Vec<u8> = digits.bytes().collect();
    let mut carry = true;
    for b in out.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
            }
        }
    }

    let body = String::from_utf8(out).unwrap_or_else(|_| digits.to_string());
    if carry {
        format!("{}1{}", sign, body)
    } else {
        format!("{}{}", sign, body)
    }
}

/// `a + b`, rounded
pub fn add(a: f64, b: f64) -> f64 {
    round_to_precision(a + b)
}

/// `a - b`, rounded
pub fn subtract(a: f64, b: f64) -> f64 {
    round_to_precision(a - b)
}

/// `a * b`, rounded
pub fn multiply(a: f64, b: f64) -> f64 {
    round_to_precision(a * b)
}

/// `a / b`, rounded.
///
/// # Errors
///
/// [`CalcError::DivisionByZero`] when `b` is zero (either sign). No partial
/// result is produced.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(round_to_precision(a / b))
}

/// True iff `s` parses to a finite number.
///
/// Surrounding whitespace is ignored. Empty strings, text, and anything that
/// parses to NaN or infinity are rejected.
///
/// ```
/// use calc_core::arithmetic::validate_number;
///
/// assert!(validate_number("3.14"));
/// assert!(validate_number("-5"));
/// assert!(!validate_number(""));
/// assert!(!validate_number("inf"));
/// ```
pub fn validate_number(s: &str) -> bool {
    s.trim()
        .parse::<f64>()
        .map(|v| v.is_finite())
        .unwrap_or(false)
}

/// A binary operator that can be pending in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// ASCII symbol, as typed on a keyboard
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Symbol shown on buttons and in the pending-expression line
    pub fn display_symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Parse either the ASCII or the display symbol.
    ///
    /// ```
    /// use calc_core::arithmetic::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('×'), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
    /// assert_eq!(Operator::from_symbol('%'), None);
    /// ```
    pub fn from_symbol(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | '×' | 'x' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// # Errors
    ///
    /// - [`CalcError::DivisionByZero`] for a zero divisor
    /// - [`CalcError::Overflow`] when the result is outside the f64 range
    pub fn apply(&self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let result = match self {
            Operator::Add => add(lhs, rhs),
            Operator::Subtract => subtract(lhs, rhs),
            Operator::Multiply => multiply(lhs, rhs),
            Operator::Divide => divide(lhs, rhs)?,
        };

        if !result.is_finite() {
            tracing::warn!(operator = %self, lhs, rhs, "result out of range");
            return Err(CalcError::Overflow);
        }
        Ok(result)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_symbol())
    }
}
