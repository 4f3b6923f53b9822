//! C/C++ numeric literal formatting for generated sources.

use crate::error::{Error, Result};

/// Fractional digits printed before trailing zeros are stripped.
const PRECISION: usize = 6;

/// Formats a numeric string as a C/C++ `double` literal.
///
/// Empty input yields `"0.0"`. Otherwise the value is printed with six
/// fractional digits, trailing zeros are dropped, and a single `0` is kept
/// after the decimal point when nothing else remains.
///
/// # Errors
/// * `Error::FormatError` if `text` is not a finite number
///
/// # Examples
/// ```
/// use plugen::literal::format_double;
///
/// assert_eq!(format_double("1").unwrap(), "1.0");
/// assert_eq!(format_double("1.2500000").unwrap(), "1.25");
/// assert_eq!(format_double("").unwrap(), "0.0");
/// ```
pub fn format_double(text: &str) -> Result<String> {
    if text.is_empty() {
        return Ok("0.0".to_string());
    }

    let value: f64 = text.trim().parse().map_err(|_| invalid_number(text))?;
    if !value.is_finite() {
        return Err(invalid_number(text));
    }

    let fixed = format!("{:.*}", PRECISION, value);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        Ok(format!("{trimmed}0"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Formats a numeric string as a C/C++ `float` literal (`format_double` plus `f`).
///
/// # Examples
/// ```
/// use plugen::literal::format_float;
///
/// assert_eq!(format_float("2").unwrap(), "2.0f");
/// ```
pub fn format_float(text: &str) -> Result<String> {
    format_double(text).map(|literal| literal + "f")
}

fn invalid_number(text: &str) -> Error {
    Error::FormatError {
        value: text.to_string(),
        expected: "number".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_six_digits() {
        assert_eq!(format_double("0.1234567").unwrap(), "0.123457");
        assert_eq!(format_double("0.0000001").unwrap(), "0.0");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_double("-24").unwrap(), "-24.0");
        assert_eq!(format_float("-0.5").unwrap(), "-0.5f");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(format_double("1e3").unwrap(), "1000.0");
        assert_eq!(format_double("2.5E-2").unwrap(), "0.025");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(format_double(" 3 ").unwrap(), "3.0");
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!(matches!(format_double("inf"), Err(Error::FormatError { .. })));
        assert!(matches!(format_double("NaN"), Err(Error::FormatError { .. })));
    }

    #[test]
    fn test_whitespace_only_is_rejected() {
        assert!(matches!(format_double("  "), Err(Error::FormatError { .. })));
    }
}
