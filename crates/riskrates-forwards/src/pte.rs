//! Balanced forward price (PTE) for FX forwards.
//!
//! The balanced forward price grows the spot exchange rate with the domestic
//! rate compounded over the year fraction, and discounts it with the
//! international rate accrued linearly:
//!
//! ```text
//! τ   = t / b
//! PTE = S * (1 + r_d)^τ / (1 + r_i * τ)
//! ```
//!
//! The compound-domestic / simple-international asymmetry is the market
//! convention this price follows and is not symmetrised.
//!
//! # Failure policy
//!
//! [`calc_pte`] and [`calc_pte_array`] never return errors: any failure
//! (zero basis, zero accrual factor, undefined power, overflow) collapses to
//! `None` and the cause is only visible in `debug` logs. Use [`try_calc_pte`]
//! when the cause matters.

use log::debug;
use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn, Zip};

use riskrates_core::math::{checked_div, checked_powf};
use riskrates_core::{Date, DayCountBasis, RiskError, RiskResult};

/// PTE for a year fraction that has already been computed.
fn balanced_forward(rc: f64, rd: f64, ri: f64, year_fraction: f64) -> RiskResult<f64> {
    let domestic_growth = checked_powf(1.0 + rd, year_fraction)?;
    let international_accrual = 1.0 + ri * year_fraction;
    let pte = checked_div(
        rc * domestic_growth,
        international_accrual,
        "international accrual factor",
    )?;
    if pte.is_infinite() {
        return Err(RiskError::overflow("balanced forward price"));
    }
    Ok(pte)
}

/// Computes the balanced forward price, reporting why it failed.
///
/// # Arguments
///
/// * `rc` - Spot exchange rate
/// * `rd` - Domestic interest rate (decimal)
/// * `ri` - International interest rate (decimal)
/// * `t` - Time interval, in the units of `b` (usually days)
/// * `b` - Basis, e.g. 360 or 365
///
/// # Errors
///
/// - `RiskError::DivisionByZero` if `b == 0` or `1 + ri * t / b == 0`
/// - `RiskError::Domain` if `1 + rd <= 0` and `t / b` is not integral
/// - `RiskError::Overflow` if the price is infinite
pub fn try_calc_pte(rc: f64, rd: f64, ri: f64, t: f64, b: f64) -> RiskResult<f64> {
    let year_fraction = checked_div(t, b, "PTE year fraction")?;
    balanced_forward(rc, rd, ri, year_fraction)
}

/// Computes the balanced forward price.
///
/// Returns `None` on any failure, without distinguishing the cause.
///
/// # Example
///
/// ```rust
/// use riskrates_forwards::calc_pte;
///
/// let pte = calc_pte(5.0, 0.10, 0.04, 90.0, 360.0).unwrap();
/// let expected = 5.0 * 1.10_f64.powf(0.25) / (1.0 + 0.04 * 0.25);
/// assert!((pte - expected).abs() < 1e-12);
///
/// // Zero basis
/// assert!(calc_pte(5.0, 0.10, 0.04, 90.0, 0.0).is_none());
/// ```
#[must_use]
pub fn calc_pte(rc: f64, rd: f64, ri: f64, t: f64, b: f64) -> Option<f64> {
    try_calc_pte(rc, rd, ri, t, b)
        .map_err(|err| debug!("calc_pte suppressed failure: {err}"))
        .ok()
}

/// Computes the balanced forward price over a date interval.
///
/// The year fraction is `basis`'s actual-day fraction from `start` to `end`.
/// Returns `None` on any failure, like [`calc_pte`].
///
/// # Example
///
/// ```rust
/// use riskrates_core::{Date, DayCountBasis};
/// use riskrates_forwards::{calc_pte, calc_pte_between};
///
/// let spot = Date::from_ymd(2025, 1, 1).unwrap();
/// let maturity = Date::from_ymd(2025, 4, 1).unwrap();
///
/// let dated = calc_pte_between(5.0, 0.10, 0.04, spot, maturity, DayCountBasis::Act360);
/// assert_eq!(dated, calc_pte(5.0, 0.10, 0.04, 90.0, 360.0));
/// ```
#[must_use]
pub fn calc_pte_between(
    rc: f64,
    rd: f64,
    ri: f64,
    start: Date,
    end: Date,
    basis: DayCountBasis,
) -> Option<f64> {
    basis
        .year_fraction_between(start, end)
        .and_then(|year_fraction| balanced_forward(rc, rd, ri, year_fraction))
        .map_err(|err| debug!("calc_pte_between suppressed failure: {err}"))
        .ok()
}

/// Result shape of broadcasting `shapes` together.
///
/// Shapes are right-aligned; on each axis the lengths must agree or be 1.
/// Returns `None` if the shapes are incompatible.
fn broadcast_shape(shapes: &[&[usize]]) -> Option<Vec<usize>> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1; ndim];
    for shape in shapes {
        for (axis, &len) in shape.iter().rev().enumerate() {
            let slot = &mut out[ndim - 1 - axis];
            if *slot == 1 {
                *slot = len;
            } else if len != 1 && len != *slot {
                return None;
            }
        }
    }
    Some(out)
}

/// Computes the balanced forward price elementwise over arrays.
///
/// The three rate operands are broadcast together with the usual
/// right-aligned rules: any of them may be zero-dimensional
/// (`ndarray::arr0`), have length-one axes, or match the others' shape.
/// A single spot can therefore be priced against a whole rate curve. The
/// result has the broadcast shape.
///
/// Returns `None` if the shapes cannot be broadcast together, or if the
/// computation fails for any element. No partial results are returned.
///
/// # Example
///
/// ```rust
/// use ndarray::{arr0, array};
/// use riskrates_forwards::{calc_pte, calc_pte_array};
///
/// let spot = arr0(5.0);
/// let domestic = array![0.10, 0.11, 0.09];
/// let international = arr0(0.04);
///
/// let prices = calc_pte_array(&spot, &domestic, &international, 90.0, 360.0).unwrap();
/// assert_eq!(prices.shape(), &[3]);
/// assert_eq!(prices[[1]], calc_pte(5.0, 0.11, 0.04, 90.0, 360.0).unwrap());
/// ```
#[must_use]
pub fn calc_pte_array<S1, S2, S3, D1, D2, D3>(
    rc: &ArrayBase<S1, D1>,
    rd: &ArrayBase<S2, D2>,
    ri: &ArrayBase<S3, D3>,
    t: f64,
    b: f64,
) -> Option<ArrayD<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
    D3: Dimension,
{
    let year_fraction = match checked_div(t, b, "PTE year fraction") {
        Ok(tau) => tau,
        Err(err) => {
            debug!("calc_pte_array suppressed failure: {err}");
            return None;
        }
    };

    let views = broadcast_shape(&[rc.shape(), rd.shape(), ri.shape()]).and_then(|shape| {
        let shape = IxDyn(&shape);
        Some((
            rc.broadcast(shape.clone())?,
            rd.broadcast(shape.clone())?,
            ri.broadcast(shape)?,
        ))
    });
    let Some((rc_view, rd_view, ri_view)) = views else {
        debug!(
            "calc_pte_array: cannot broadcast shapes {:?}, {:?} and {:?}",
            rc.shape(),
            rd.shape(),
            ri.shape()
        );
        return None;
    };

    let mut failure: Option<RiskError> = None;
    let prices = Zip::from(rc_view)
        .and(rd_view)
        .and(ri_view)
        .map_collect(|&c, &d, &i| {
            balanced_forward(c, d, i, year_fraction).unwrap_or_else(|err| {
                failure.get_or_insert(err);
                f64::NAN
            })
        });

    match failure {
        Some(err) => {
            debug!("calc_pte_array suppressed failure: {err}");
            None
        }
        None => Some(prices),
    }
}
