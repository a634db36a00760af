//! # Error Types
//!
//! Structured error types for calc_core. The arithmetic engine returns these
//! instead of panicking, and the session state machine matches on them to
//! decide what the display shows.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_reciprocal(x: f64) -> CalcResult<f64> {
//!     if x == 0.0 {
//!         return Err(CalcError::DivisionByZero);
//!     }
//!     Ok(1.0 / x)
//! }
//!
//! assert_eq!(checked_reciprocal(0.0).unwrap_err().error_code(), "DIVISION_BY_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Divisor was zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Result is not a finite number (magnitude beyond f64 range)
    #[error("Result out of range")]
    Overflow,

    /// A display string could not be used as an operand
    #[error("Invalid operand: '{value}'")]
    InvalidOperand { value: String },

    /// A digit event carried something other than '0'..='9'
    #[error("Invalid digit: '{value}'")]
    InvalidDigit { value: char },

    /// A key name or script character has no calculator binding
    #[error("Unknown key: '{key}'")]
    UnknownKey { key: String },
}

impl CalcError {
    /// Create an InvalidOperand error
    pub fn invalid_operand(value: impl Into<String>) -> Self {
        CalcError::InvalidOperand {
            value: value.into(),
        }
    }

    /// Create an UnknownKey error
    pub fn unknown_key(key: impl Into<String>) -> Self {
        CalcError::UnknownKey { key: key.into() }
    }

    /// Whether the error came out of the arithmetic itself (as opposed to
    /// malformed input). Arithmetic errors end the current chain with `Error`.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, CalcError::DivisionByZero | CalcError::Overflow)
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::Overflow => "OVERFLOW",
            CalcError::InvalidOperand { .. } => "INVALID_OPERAND",
            CalcError::InvalidDigit { .. } => "INVALID_DIGIT",
            CalcError::UnknownKey { .. } => "UNKNOWN_KEY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_operand("Error");
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"type":"InvalidOperand","details":{"value":"Error"}}"#);

        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_unit_variant_serialization() {
        let json = serde_json::to_string(&CalcError::DivisionByZero).unwrap();
        assert_eq!(json, r#"{"type":"DivisionByZero"}"#);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::DivisionByZero.error_code(), "DIVISION_BY_ZERO");
        assert_eq!(CalcError::Overflow.error_code(), "OVERFLOW");
        assert_eq!(CalcError::unknown_key("F1").error_code(), "UNKNOWN_KEY");
        assert_eq!(CalcError::InvalidDigit { value: 'a' }.error_code(), "INVALID_DIGIT");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(CalcError::unknown_key("F1").to_string(), "Unknown key: 'F1'");
    }

    #[test]
    fn test_arithmetic_classification() {
        assert!(CalcError::DivisionByZero.is_arithmetic());
        assert!(CalcError::Overflow.is_arithmetic());
        assert!(!CalcError::invalid_operand("x").is_arithmetic());
    }
}
