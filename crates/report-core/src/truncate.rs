//! Truncating number formatting.

use crate::error::{ReportError, Result};

/// Formats `x` with exactly `places` fractional digits, discarding (never rounding) the rest.
///
/// Zero renders as a bare `"0"`. Values below one are zero-padded (`0.5` with two
/// places is `"0.50"`). Negative values truncate toward zero and keep their sign,
/// even when the truncated magnitude is zero (`-0.001` becomes `"-0.00"`). With
/// `places == 0` no decimal point is written.
///
/// # Errors
///
/// Returns [`ReportError::Format`] if `x` is NaN or infinite.
pub fn truncate(x: f64, places: u32) -> Result<String> {
    if !x.is_finite() {
        return Err(ReportError::Format {
            field: "truncate",
            value: x.to_string(),
        });
    }
    if x == 0.0 {
        return Ok("0".to_string());
    }

    let exponent = i32::try_from(places)
        .map_err(|_| ReportError::InvalidParameter(format!("{places} decimal places")))?;
    let scaled = (x.abs() * 10f64.powi(exponent)).trunc();
    if !scaled.is_finite() {
        return Err(ReportError::Format {
            field: "truncate",
            value: x.to_string(),
        });
    }

    let places = places as usize;
    let digits = format!("{scaled:0>width$.0}", width = places + 1);
    let sign = if x < 0.0 { "-" } else { "" };

    if places == 0 {
        return Ok(format!("{sign}{digits}"));
    }
    let (whole, frac) = digits.split_at(digits.len() - places);
    Ok(format!("{sign}{whole}.{frac}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero() {
        for places in 0..6 {
            assert_eq!(truncate(0.0, places).unwrap(), "0");
        }
        assert_eq!(truncate(-0.0, 2).unwrap(), "0");
    }

    #[test]
    fn test_truncates_not_rounds() {
        assert_eq!(truncate(1.2345, 2).unwrap(), "1.23");
        assert_eq!(truncate(1.999, 2).unwrap(), "1.99");
        assert_eq!(truncate(1.0, 2).unwrap(), "1.00");
        assert_eq!(truncate(123.456, 1).unwrap(), "123.4");
    }

    #[test]
    fn test_small_values_are_padded() {
        assert_eq!(truncate(0.5, 2).unwrap(), "0.50");
        assert_eq!(truncate(0.05, 3).unwrap(), "0.050");
        assert_eq!(truncate(0.001, 2).unwrap(), "0.00");
    }

    #[test]
    fn test_zero_places() {
        assert_eq!(truncate(7.9, 0).unwrap(), "7");
        assert_eq!(truncate(-7.9, 0).unwrap(), "-7");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(truncate(-1.0, 2).unwrap(), "-1.00");
        assert_eq!(truncate(-1.2399, 2).unwrap(), "-1.23");
        assert_eq!(truncate(-0.001, 2).unwrap(), "-0.00");
    }

    #[test]
    fn test_non_finite() {
        assert!(matches!(
            truncate(f64::NAN, 2),
            Err(ReportError::Format { .. })
        ));
        assert!(truncate(f64::INFINITY, 2).is_err());
    }

    /// Cuts the decimal rendering of the scaled value at its point.
    fn digit_cut(x: f64, places: u32) -> String {
        let scaled = (x * 10f64.powi(places as i32)).to_string();
        let int_digits = scaled.split('.').next().unwrap();
        let places = places as usize;
        let padded = format!("{int_digits:0>width$}", width = places + 1);
        let (whole, frac) = padded.split_at(padded.len() - places);
        if frac.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{frac}")
        }
    }

    #[test]
    fn test_digit_cut_reference() {
        assert_eq!(digit_cut(1.2345, 2), "1.23");
        assert_eq!(digit_cut(0.05, 2), "0.05");
        assert_eq!(digit_cut(42.9, 0), "42");
    }

    proptest! {
        /// Agrees with cutting the scaled value's decimal text.
        #[test]
        fn matches_digit_cut(x in 0.0001f64..1_000_000.0, places in 0u32..5) {
            prop_assert_eq!(truncate(x, places).unwrap(), digit_cut(x, places));
        }

        /// Truncation never produces a value above the input.
        #[test]
        fn never_rounds_up(x in 0.0001f64..1_000_000.0, places in 0u32..5) {
            let rendered = truncate(x, places).unwrap();
            let parsed: f64 = rendered.parse().unwrap();
            prop_assert!(parsed <= x + 1e-9);
            prop_assert!(x - parsed < 10f64.powi(-(places as i32)) + 1e-9);
        }

        /// The fractional part always has exactly `places` digits.
        #[test]
        fn fixed_fraction_width(x in 0.0001f64..1_000_000.0, places in 1u32..5) {
            let rendered = truncate(x, places).unwrap();
            let (_, frac) = rendered.split_once('.').unwrap();
            prop_assert_eq!(frac.len(), places as usize);
        }

        /// Negation only flips the sign.
        #[test]
        fn sign_symmetry(x in 0.0001f64..1_000_000.0, places in 0u32..5) {
            let positive = truncate(x, places).unwrap();
            let negative = truncate(-x, places).unwrap();
            prop_assert_eq!(negative, format!("-{positive}"));
        }
    }
}
