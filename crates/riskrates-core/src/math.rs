//! Checked real-valued arithmetic.
//!
//! `f64::powf` silently returns NaN for a negative base with a fractional
//! exponent and infinity on overflow. The helpers here turn those cases into
//! [`RiskError`] values so rate formulas can propagate them with `?`.

use crate::error::{RiskError, RiskResult};

/// Returns true if `x` is a finite whole number.
#[inline]
#[must_use]
pub fn is_integral(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// Raises `base` to `exponent`, failing where the real power is undefined.
///
/// # Errors
///
/// - [`RiskError::Domain`] if `base <= 0` and `exponent` is not integral.
/// - [`RiskError::DivisionByZero`] if `base == 0` and `exponent < 0`.
/// - [`RiskError::Overflow`] if finite inputs produce an infinite result.
///
/// NaN inputs are passed through to `powf` and yield NaN.
///
/// # Example
///
/// ```rust
/// use riskrates_core::math::checked_powf;
///
/// assert_eq!(checked_powf(1.05, 2.0).unwrap(), 1.05_f64.powf(2.0));
/// assert_eq!(checked_powf(-0.5, 2.0).unwrap(), 0.25);
/// assert!(checked_powf(-0.5, 0.5).unwrap_err().is_domain());
/// ```
pub fn checked_powf(base: f64, exponent: f64) -> RiskResult<f64> {
    if base <= 0.0 && !is_integral(exponent) {
        return Err(RiskError::domain(base, exponent));
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(RiskError::division_by_zero(format!(
            "0 raised to negative power {exponent}"
        )));
    }

    let value = base.powf(exponent);
    if value.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(RiskError::overflow(format!("{base} ^ {exponent}")));
    }
    Ok(value)
}

/// Divides `numerator` by `denominator`, failing on an exact zero denominator.
///
/// # Errors
///
/// Returns [`RiskError::DivisionByZero`] naming `operation` when
/// `denominator == 0`.
pub fn checked_div(numerator: f64, denominator: f64, operation: &str) -> RiskResult<f64> {
    if denominator == 0.0 {
        return Err(RiskError::division_by_zero(operation));
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_positive_base() {
        assert_relative_eq!(checked_powf(1.06, 2.0).unwrap(), 1.1236, epsilon = 1e-12);
        assert_relative_eq!(
            checked_powf(1.10, 0.25).unwrap(),
            1.10_f64.powf(0.25),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_negative_base_integral_exponent() {
        assert_relative_eq!(checked_powf(-0.5, 3.0).unwrap(), -0.125, epsilon = 1e-15);
        assert_relative_eq!(checked_powf(-2.0, -1.0).unwrap(), -0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_non_positive_base_fractional_exponent() {
        assert!(matches!(
            checked_powf(-0.5, 0.5),
            Err(RiskError::Domain { base, exponent }) if base == -0.5 && exponent == 0.5
        ));
        // Zero base counts as non-positive
        assert!(checked_powf(0.0, 1.5).unwrap_err().is_domain());
    }

    #[test]
    fn test_zero_base_negative_exponent() {
        assert!(matches!(
            checked_powf(0.0, -2.0),
            Err(RiskError::DivisionByZero { .. })
        ));
        assert_eq!(checked_powf(0.0, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            checked_powf(1.5, 5000.0),
            Err(RiskError::Overflow { .. })
        ));
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(checked_powf(f64::NAN, 2.0).unwrap().is_nan());
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(checked_div(90.0, 360.0, "year fraction").unwrap(), 0.25);
        assert!(matches!(
            checked_div(90.0, 0.0, "year fraction"),
            Err(RiskError::DivisionByZero { operation }) if operation == "year fraction"
        ));
    }

    #[test]
    fn test_is_integral() {
        assert!(is_integral(3.0));
        assert!(is_integral(-2.0));
        assert!(!is_integral(0.25));
        assert!(!is_integral(f64::INFINITY));
        assert!(!is_integral(f64::NAN));
    }
}
