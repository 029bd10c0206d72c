//! Spot rate term structures.

use serde::Serialize;

use riskrates_core::{ForwardPoint, RatePoint, RiskResult};

use crate::forward::calc_forward_rate;

/// An ordered sequence of spot rates, positionally aligned with maturities.
///
/// Construction enforces the alignment invariant: maturities and rates have
/// the same, non-zero length.
///
/// # Example
///
/// ```rust
/// use riskrates_forwards::TermStructure;
///
/// let curve = TermStructure::new(vec![1.0, 2.0, 5.0], vec![0.030, 0.032, 0.035]).unwrap();
/// let forwards = curve.forward_points().unwrap();
/// assert_eq!(forwards.len(), 2);
///
/// assert!(TermStructure::new(vec![1.0, 2.0], vec![0.03]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermStructure {
    maturities: Vec<f64>,
    rates: Vec<f64>,
}

impl TermStructure {
    /// Creates a term structure from parallel maturity and rate vectors.
    ///
    /// Returns `None` if either vector is empty or their lengths differ.
    #[must_use]
    pub fn new(maturities: Vec<f64>, rates: Vec<f64>) -> Option<Self> {
        if maturities.is_empty() || maturities.len() != rates.len() {
            return None;
        }
        Some(Self { maturities, rates })
    }

    /// Creates a term structure from rate points.
    ///
    /// Returns `None` if `points` is empty.
    #[must_use]
    pub fn from_points(points: &[RatePoint]) -> Option<Self> {
        let (maturities, rates) = points.iter().map(|p| (p.maturity, p.rate)).unzip();
        Self::new(maturities, rates)
    }

    /// Returns the maturities.
    #[must_use]
    pub fn maturities(&self) -> &[f64] {
        &self.maturities
    }

    /// Returns the spot rates.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maturities.len()
    }

    /// Always false; an empty term structure cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maturities.is_empty()
    }

    /// Iterates over the vertices as rate points.
    pub fn points(&self) -> impl Iterator<Item = RatePoint> + '_ {
        self.maturities
            .iter()
            .zip(&self.rates)
            .map(|(&maturity, &rate)| RatePoint::new(maturity, rate))
    }

    /// Computes the forward points between consecutive vertices.
    ///
    /// # Errors
    ///
    /// Propagates the first per-pair error from
    /// [`forward_rate`](crate::forward_rate).
    pub fn forward_points(&self) -> RiskResult<Vec<ForwardPoint>> {
        // Alignment is guaranteed by construction, so the sentinel never occurs
        Ok(calc_forward_rate(&self.maturities, &self.rates)?.unwrap_or_default())
    }
}
