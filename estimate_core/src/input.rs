//! Text-to-number parsing for form-style inputs.
//!
//! Front ends that collect numbers as text hand them here. Under
//! [`ParsePolicy::Lenient`] the leading numeric prefix is read (`"12ft"` is 12)
//! and anything unreadable becomes 0. [`ParsePolicy::Strict`] rejects
//! anything that is not entirely a finite number.

use crate::config::ParsePolicy;
use crate::errors::{CalcError, CalcResult};

/// Parse `text` for `field` under `policy`.
pub fn parse_number(text: &str, field: &str, policy: ParsePolicy) -> CalcResult<f64> {
    match policy {
        ParsePolicy::Lenient => Ok(lenient(text)),
        ParsePolicy::Strict => match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(CalcError::parse_error(field, text)),
        },
    }
}

/// Lenient parse that falls back to `default` when the result is 0.
///
/// An explicit `"0"` also yields `default`.
pub fn parse_or(text: &str, default: f64) -> f64 {
    match lenient(text) {
        v if v == 0.0 => default,
        v => v,
    }
}

fn lenient(text: &str) -> f64 {
    let prefix = numeric_prefix(text.trim_start());
    match prefix.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12.5", 12.5)]
    #[case("  7", 7.0)]
    #[case("12ft", 12.0)]
    #[case("-3.5e2x", -350.0)]
    #[case(".5", 0.5)]
    #[case("5.", 5.0)]
    #[case("1e", 1.0)]
    #[case("", 0.0)]
    #[case("abc", 0.0)]
    #[case("-", 0.0)]
    #[case(".", 0.0)]
    #[case("1e999", 0.0)]
    fn test_lenient(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_number(text, "length", ParsePolicy::Lenient).unwrap(), expected);
    }

    #[test]
    fn test_strict() {
        assert_eq!(parse_number(" 4.25 ", "width", ParsePolicy::Strict).unwrap(), 4.25);
        let err = parse_number("12ft", "width", ParsePolicy::Strict).unwrap_err();
        assert_eq!(err, CalcError::parse_error("width", "12ft"));
        assert!(parse_number("", "width", ParsePolicy::Strict).is_err());
        assert!(parse_number("inf", "width", ParsePolicy::Strict).is_err());
    }

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or("", 10.0), 10.0);
        assert_eq!(parse_or("oops", 10.0), 10.0);
        assert_eq!(parse_or("0", 10.0), 10.0);
        assert_eq!(parse_or("15", 10.0), 15.0);
    }
}
