//! Domain types for rate analytics.
//!
//! - [`Date`]: Calendar date for day counting
//! - [`RatePoint`]: Spot rate at a maturity
//! - [`ForwardPoint`]: Forward rate ending at a maturity

mod date;
mod rate_point;

pub use date::Date;
pub use rate_point::{ForwardPoint, RatePoint};
