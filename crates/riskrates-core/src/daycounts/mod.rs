//! Day count bases.
//!
//! A basis is the denominator that turns a day count into a year fraction:
//!
//! ```text
//! year_fraction = days / basis
//! ```
//!
//! # Supported Bases
//!
//! - [`DayCountBasis::Act360`]: Actual/360 - Money market convention
//! - [`DayCountBasis::Act365`]: Actual/365 Fixed - GBP and AUD money markets
//! - [`DayCountBasis::Custom`]: Any other denominator (e.g. 252 business days)
//!
//! Bases parse from strings so hosts can keep them in their own configuration:
//!
//! ```rust
//! use riskrates_core::daycounts::DayCountBasis;
//!
//! let basis: DayCountBasis = "ACT/360".parse().unwrap();
//! assert_eq!(basis.denominator(), 360.0);
//! assert_eq!(basis.year_fraction(90.0).unwrap(), 0.25);
//!
//! let business: DayCountBasis = "252".parse().unwrap();
//! assert_eq!(business, DayCountBasis::Custom(252.0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RiskError, RiskResult};
use crate::math::checked_div;
use crate::types::Date;

/// Denominator convention converting a day count to a year fraction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DayCountBasis {
    /// Actual/360.
    #[default]
    Act360,
    /// Actual/365 Fixed.
    Act365,
    /// Actual days over an arbitrary denominator.
    ///
    /// A zero denominator is representable; year fractions computed from it
    /// fail with [`RiskError::DivisionByZero`].
    Custom(f64),
}

impl DayCountBasis {
    /// Returns the name of the basis.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            DayCountBasis::Act360 => "ACT/360".to_string(),
            DayCountBasis::Act365 => "ACT/365".to_string(),
            DayCountBasis::Custom(b) => format!("ACT/{b}"),
        }
    }

    /// Returns the denominator in days.
    #[must_use]
    pub fn denominator(&self) -> f64 {
        match self {
            DayCountBasis::Act360 => 360.0,
            DayCountBasis::Act365 => 365.0,
            DayCountBasis::Custom(b) => *b,
        }
    }

    /// Converts a day count into a year fraction.
    ///
    /// # Errors
    ///
    /// Returns `RiskError::DivisionByZero` for a zero denominator.
    pub fn year_fraction(&self, days: f64) -> RiskResult<f64> {
        checked_div(days, self.denominator(), "day count year fraction")
    }

    /// Year fraction between two dates using actual days.
    ///
    /// Negative if `end` is before `start`.
    ///
    /// # Errors
    ///
    /// Returns `RiskError::DivisionByZero` for a zero denominator.
    pub fn year_fraction_between(&self, start: Date, end: Date) -> RiskResult<f64> {
        self.year_fraction(start.days_between(&end) as f64)
    }
}

impl fmt::Display for DayCountBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountBasis {
    type Err = RiskError;

    /// Parses `ACT/360`, `ACT/365` (also `ACT/365F`), `ACT/<n>`, or a bare
    /// denominator such as `252`. Matching is case-insensitive. The
    /// denominator must be finite and positive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "ACT/360" | "A360" => return Ok(DayCountBasis::Act360),
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "A365" => {
                return Ok(DayCountBasis::Act365)
            }
            _ => {}
        }

        let number = normalized.strip_prefix("ACT/").unwrap_or(&normalized);
        let denominator: f64 = number
            .parse()
            .map_err(|_| RiskError::invalid_input(format!("unknown day count basis: {s}")))?;
        if !denominator.is_finite() || denominator <= 0.0 {
            return Err(RiskError::invalid_input(format!(
                "day count denominator must be finite and positive: {s}"
            )));
        }
        Ok(match denominator {
            d if d == 360.0 => DayCountBasis::Act360,
            d if d == 365.0 => DayCountBasis::Act365,
            d => DayCountBasis::Custom(d),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act360_quarter() {
        assert_eq!(DayCountBasis::Act360.year_fraction(90.0).unwrap(), 0.25);
    }

    #[test]
    fn test_act365_full_year() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();
        assert_relative_eq!(
            DayCountBasis::Act365.year_fraction_between(start, end).unwrap(),
            1.0,
            epsilon = 1e-15
        );
        // Non-leap year: 365/360 > 1
        assert!(DayCountBasis::Act360.year_fraction_between(start, end).unwrap() > 1.0);
    }

    #[test]
    fn test_zero_denominator() {
        assert!(matches!(
            DayCountBasis::Custom(0.0).year_fraction(90.0),
            Err(RiskError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_parse() {
        assert_eq!("act/365f".parse::<DayCountBasis>().unwrap(), DayCountBasis::Act365);
        assert_eq!("360".parse::<DayCountBasis>().unwrap(), DayCountBasis::Act360);
        assert_eq!(
            "ACT/252".parse::<DayCountBasis>().unwrap(),
            DayCountBasis::Custom(252.0)
        );
        assert!("30/360".parse::<DayCountBasis>().is_err());
    }

    #[test]
    fn test_parse_rejects_degenerate_denominators() {
        for input in ["nan", "inf", "-inf", "ACT/NaN", "-360", "0", "ACT/0", "-0"] {
            assert!(
                matches!(
                    input.parse::<DayCountBasis>(),
                    Err(RiskError::InvalidInput { .. })
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for basis in [
            DayCountBasis::Act360,
            DayCountBasis::Act365,
            DayCountBasis::Custom(252.0),
        ] {
            assert_eq!(basis.to_string().parse::<DayCountBasis>().unwrap(), basis);
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&DayCountBasis::Custom(252.0)).unwrap();
        assert_eq!(json, r#"{"Custom":252.0}"#);
        let basis: DayCountBasis = serde_json::from_str(r#""Act365""#).unwrap();
        assert_eq!(basis, DayCountBasis::Act365);
    }
}
