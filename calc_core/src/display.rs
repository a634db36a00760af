//! Conversions between operands and the strings shown on the display.

use crate::errors::{CalcError, CalcResult};

/// Display value of a fresh (or cleared) session
pub const INITIAL_DISPLAY: &str = "0";

/// Display value after a failed computation
pub const ERROR_DISPLAY: &str = "Error";

/// Magnitude at and above which results switch to exponent form
const EXPONENT_UPPER: f64 = 1e21;

/// Non-zero magnitude below which results switch to exponent form
const EXPONENT_LOWER: f64 = 1e-6;

/// Render a computed result for the display.
///
/// - integral values have no fractional part (`8`, not `8.0`)
/// - negative zero renders as `0`
/// - otherwise the shortest string that parses back to the same value
/// - very large or very small magnitudes use exponent form (`1e+21`, `1.5e-7`)
///
/// Non-finite values never come out of the arithmetic engine; if one shows up
/// it renders as [`ERROR_DISPLAY`].
///
/// ```
/// use calc_core::display::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(6.28), "6.28");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }
    if value == 0.0 {
        return INITIAL_DISPLAY.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    value.to_string()
}

/// Parse a display string into an operand.
///
/// # Errors
///
/// [`CalcError::InvalidOperand`] when the string is not a finite number
/// (the `Error` display, a bare sign, ...).
pub fn parse_operand(display: &str) -> CalcResult<f64> {
    match display.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::invalid_operand(display)),
    }
}
