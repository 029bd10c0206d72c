//! # RiskRates Core
//!
//! Core types, day count bases, and errors for the RiskRates analytics library.
//!
//! This crate provides the building blocks used by the rate calculations:
//!
//! - **Types**: [`RatePoint`], [`ForwardPoint`], [`Date`]
//! - **Day Count Bases**: ACT/360, ACT/365 and custom denominators
//! - **Checked Math**: real powers that report domain violations instead of NaN
//! - **Errors**: [`RiskError`] and [`RiskResult`]
//!
//! ## Example
//!
//! ```rust
//! use riskrates_core::prelude::*;
//!
//! let basis = DayCountBasis::Act360;
//! assert_eq!(basis.year_fraction(180.0).unwrap(), 0.5);
//!
//! let point = RatePoint::new(2.0, 0.06);
//! assert_eq!(point.maturity, 2.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod math;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::DayCountBasis;
    pub use crate::error::{RiskError, RiskResult};
    pub use crate::math::checked_powf;
    pub use crate::types::{Date, ForwardPoint, RatePoint};
}

// Re-export commonly used types at crate root
pub use daycounts::DayCountBasis;
pub use error::{RiskError, RiskResult};
pub use types::{Date, ForwardPoint, RatePoint};
