//! Rate points and forward points.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A spot rate observed at a maturity.
///
/// The rate is a decimal fraction (0.05 for 5%); the maturity is a time
/// period, typically in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Maturity of the rate.
    pub maturity: f64,
    /// Spot rate as a decimal.
    pub rate: f64,
}

impl RatePoint {
    /// Creates a new rate point.
    #[must_use]
    pub fn new(maturity: f64, rate: f64) -> Self {
        Self { maturity, rate }
    }
}

impl From<(f64, f64)> for RatePoint {
    fn from((maturity, rate): (f64, f64)) -> Self {
        Self::new(maturity, rate)
    }
}

/// A forward rate ending at a maturity.
///
/// Produced pairwise from consecutive [`RatePoint`]s: `end_maturity` is the
/// later point's maturity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardPoint {
    /// Maturity at which the forward period ends.
    pub end_maturity: f64,
    /// Implied forward rate as a decimal.
    pub forward_rate: f64,
}

impl ForwardPoint {
    /// Creates a new forward point.
    #[must_use]
    pub fn new(end_maturity: f64, forward_rate: f64) -> Self {
        Self {
            end_maturity,
            forward_rate,
        }
    }

    /// Returns the point as an `(end_maturity, forward_rate)` tuple.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.end_maturity, self.forward_rate)
    }
}

impl fmt::Display for ForwardPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.6}%", self.end_maturity, self.forward_rate * 100.0)
    }
}
