//! # RiskRates Forwards
//!
//! Closed-form forward calculations:
//!
//! - **Forward rates**: [`forward_rate`] between two spot vertices and
//!   [`calc_forward_rate`] across a whole term structure
//! - **Balanced forward price**: [`calc_pte`] for an FX forward from spot,
//!   domestic and international rates, plus an elementwise array form
//!   [`calc_pte_array`]
//!
//! ## Error handling
//!
//! The three calculations follow different failure contracts:
//!
//! | Function | Invalid shape | Numerical failure |
//! |----------|---------------|-------------------|
//! | [`forward_rate`] | n/a | `Err(RiskError)` |
//! | [`calc_forward_rate`] | `Ok(None)` | `Err(RiskError)` |
//! | [`calc_pte`] | n/a | `None` |
//!
//! Callers must check for `None` before using the results of
//! [`calc_forward_rate`] and [`calc_pte`].
//!
//! ## Example
//!
//! ```rust
//! use riskrates_forwards::prelude::*;
//!
//! let forwards = calc_forward_rate(&[1.0, 2.0, 3.0], &[0.05, 0.06, 0.07])?
//!     .expect("aligned inputs");
//! assert_eq!(forwards.len(), 2);
//!
//! let pte = calc_pte(5.0, 0.10, 0.04, 90.0, 360.0);
//! assert!(pte.is_some());
//! # Ok::<(), riskrates_core::RiskError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod forward;
pub mod pte;
pub mod term_structure;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::forward::{calc_forward_rate, forward_rate};
    pub use crate::pte::{calc_pte, calc_pte_array, calc_pte_between, try_calc_pte};
    pub use crate::term_structure::TermStructure;
    pub use riskrates_core::prelude::*;
}

pub use forward::{calc_forward_rate, forward_rate};
pub use pte::{calc_pte, calc_pte_array, calc_pte_between, try_calc_pte};
pub use term_structure::TermStructure;
