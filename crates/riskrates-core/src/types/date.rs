//! Date type for day-count calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::error::{RiskError, RiskResult};

/// A calendar date.
///
/// Newtype wrapper around `chrono::NaiveDate` exposing only what the
/// day-count bases need.
///
/// # Example
///
/// ```rust
/// use riskrates_core::types::Date;
///
/// let spot = Date::from_ymd(2025, 1, 1).unwrap();
/// let maturity = Date::from_ymd(2025, 4, 1).unwrap();
/// assert_eq!(spot.days_between(&maturity), 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `RiskError::InvalidInput` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> RiskResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| {
                RiskError::invalid_input(format!("invalid date {year}-{month:02}-{day:02}"))
            })
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `RiskError::InvalidInput` if the string is not a valid date.
    pub fn parse(s: &str) -> RiskResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| RiskError::invalid_input(format!("cannot parse date: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the number of actual days from `self` to `other`.
    ///
    /// Negative if `other` is before `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}
