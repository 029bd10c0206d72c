//! Forward rates implied by spot rates.
//!
//! # Mathematical Background
//!
//! Given spot rates `r_a` and `r_b` observed at maturities `t_a` and `t_b`,
//! the implied forward rate is:
//!
//! ```text
//! f = (1 + r_b)^t_b / (1 + r_a)^t_a - 1
//! ```
//!
//! The exponents are the absolute maturities, not the period `t_b - t_a`, so
//! `f` is the growth over the whole forward period rather than an annualised
//! rate.

use log::debug;
use riskrates_core::math::{checked_div, checked_powf};
use riskrates_core::{ForwardPoint, RiskResult};

/// Computes the forward rate between two (rate, maturity) pairs.
///
/// # Arguments
///
/// * `ra` - Spot rate at the first vertex (decimal)
/// * `rb` - Spot rate at the second vertex (decimal)
/// * `ta` - First maturity
/// * `tb` - Second maturity
///
/// # Errors
///
/// - `RiskError::Domain` if `1 + ra <= 0` with non-integral `ta`, or
///   `1 + rb <= 0` with non-integral `tb`
/// - `RiskError::DivisionByZero` if `(1 + ra)^ta` is zero
/// - `RiskError::Overflow` if either growth factor overflows
///
/// # Example
///
/// ```rust
/// use riskrates_forwards::forward_rate;
///
/// let f = forward_rate(0.05, 0.06, 1.0, 2.0).unwrap();
/// assert!((f - (1.06_f64.powi(2) / 1.05 - 1.0)).abs() < 1e-15);
/// ```
pub fn forward_rate(ra: f64, rb: f64, ta: f64, tb: f64) -> RiskResult<f64> {
    let growth_b = checked_powf(1.0 + rb, tb)?;
    let growth_a = checked_powf(1.0 + ra, ta)?;
    Ok(checked_div(growth_b, growth_a, "forward rate")? - 1.0)
}

/// Computes forward points from parallel maturity and spot rate sequences.
///
/// For each consecutive pair `(i, i + 1)` the forward rate
/// `forward_rate(spot_rates[i], spot_rates[i + 1], dates[i], dates[i + 1])`
/// is emitted at `dates[i + 1]`, so valid input of length `n` yields `n - 1`
/// points. Dates are expected to be increasing; this is not checked.
///
/// # Returns
///
/// - `Ok(None)` if either sequence is empty or their lengths differ
/// - `Ok(Some(vec![]))` for a single vertex
/// - `Ok(Some(points))` otherwise
///
/// # Errors
///
/// Any per-pair failure from [`forward_rate`] aborts the whole computation;
/// no partial results are returned.
///
/// # Example
///
/// ```rust
/// use riskrates_forwards::calc_forward_rate;
///
/// let points = calc_forward_rate(&[1.0, 2.0, 3.0], &[0.05, 0.06, 0.07])
///     .unwrap()
///     .unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[0].end_maturity, 2.0);
///
/// assert!(calc_forward_rate(&[1.0, 2.0], &[0.05]).unwrap().is_none());
/// ```
pub fn calc_forward_rate(
    dates: &[f64],
    spot_rates: &[f64],
) -> RiskResult<Option<Vec<ForwardPoint>>> {
    if dates.is_empty() || spot_rates.is_empty() || dates.len() != spot_rates.len() {
        debug!(
            "calc_forward_rate: incompatible inputs ({} dates, {} spot rates)",
            dates.len(),
            spot_rates.len()
        );
        return Ok(None);
    }

    dates
        .windows(2)
        .zip(spot_rates.windows(2))
        .map(|(t, r)| {
            let f = forward_rate(r[0], r[1], t[0], t[1])?;
            Ok(ForwardPoint::new(t[1], f))
        })
        .collect::<RiskResult<Vec<_>>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use riskrates_core::RiskError;

    #[test]
    fn test_forward_rate_basic() {
        let f = forward_rate(0.05, 0.06, 1.0, 2.0).unwrap();
        assert_relative_eq!(f, 1.06_f64.powf(2.0) / 1.05 - 1.0, epsilon = 1e-15);
        assert_relative_eq!(f, 0.070095238095, epsilon = 1e-10);
    }

    #[test]
    fn test_forward_rate_uses_absolute_maturities() {
        // Exponents are ta and tb, not tb - ta
        let f = forward_rate(0.04, 0.05, 2.0, 3.0).unwrap();
        assert_relative_eq!(f, 1.05_f64.powi(3) / 1.04_f64.powi(2) - 1.0, epsilon = 1e-15);
        assert!((f - 0.05).abs() > 1e-3);
    }

    #[test]
    fn test_forward_rate_equal_pairs_is_zero() {
        assert_eq!(forward_rate(0.05, 0.05, 1.5, 1.5).unwrap(), 0.0);
    }

    #[test]
    fn test_forward_rate_negative_rates() {
        let f = forward_rate(-0.005, -0.002, 1.0, 2.0).unwrap();
        assert_relative_eq!(f, 0.998_f64.powi(2) / 0.995 - 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_forward_rate_domain_error() {
        // 1 + ra = -0.5 with fractional ta
        assert!(matches!(
            forward_rate(-1.5, 0.05, 0.5, 1.0),
            Err(RiskError::Domain { .. })
        ));
        // 1 + rb = -0.5 with fractional tb
        assert!(forward_rate(0.05, -1.5, 1.0, 1.5).unwrap_err().is_domain());
    }

    #[test]
    fn test_forward_rate_negative_base_integral_exponent() {
        let f = forward_rate(-1.5, 0.05, 2.0, 1.0).unwrap();
        assert_relative_eq!(f, 1.05 / 0.25 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_rate_zero_growth_denominator() {
        assert!(matches!(
            forward_rate(-1.0, 0.05, 1.0, 2.0),
            Err(RiskError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_calc_forward_rate_three_vertices() {
        let points = calc_forward_rate(&[1.0, 2.0, 3.0], &[0.05, 0.06, 0.07])
            .unwrap()
            .unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].end_maturity, 2.0);
        assert_eq!(
            points[0].forward_rate,
            forward_rate(0.05, 0.06, 1.0, 2.0).unwrap()
        );
        assert_eq!(points[1].end_maturity, 3.0);
        assert_eq!(
            points[1].forward_rate,
            forward_rate(0.06, 0.07, 2.0, 3.0).unwrap()
        );
    }

    #[test]
    fn test_calc_forward_rate_single_vertex() {
        let points = calc_forward_rate(&[1.0], &[0.05]).unwrap();
        assert_eq!(points, Some(vec![]));
    }

    #[test]
    fn test_calc_forward_rate_invalid_shapes() {
        assert_eq!(calc_forward_rate(&[1.0, 2.0], &[0.05]).unwrap(), None);
        assert_eq!(calc_forward_rate(&[], &[]).unwrap(), None);
        assert_eq!(calc_forward_rate(&[1.0], &[]).unwrap(), None);
        assert_eq!(calc_forward_rate(&[], &[0.05]).unwrap(), None);
    }

    #[test]
    fn test_calc_forward_rate_domain_error_is_all_or_nothing() {
        // First pair is fine, second pair has 1 + r < 0 at a fractional maturity
        let result = calc_forward_rate(&[1.0, 2.0, 2.5], &[0.05, 0.06, -1.2]);
        assert!(result.unwrap_err().is_domain());
    }
}
