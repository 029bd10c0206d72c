//! Error types for the RiskRates library.
//!
//! All fallible rate calculations report failures through [`RiskError`].
//! Callers that follow a soft-failure contract (returning `None`) still
//! compute through these errors internally and discard them at the boundary.

use thiserror::Error;

/// A specialized Result type for RiskRates operations.
pub type RiskResult<T> = Result<T, RiskError>;

/// The main error type for RiskRates operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// A real-valued power was requested for a non-positive base with a
    /// non-integral exponent.
    #[error("Domain error: {base} raised to non-integral power {exponent} is undefined")]
    Domain {
        /// The non-positive base.
        base: f64,
        /// The non-integral exponent.
        exponent: f64,
    },

    /// Division by zero.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that divided by zero.
        operation: String,
    },

    /// Numerical overflow.
    #[error("Numerical overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl RiskError {
    /// Creates a domain error.
    #[must_use]
    pub fn domain(base: f64, exponent: f64) -> Self {
        Self::Domain { base, exponent }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a domain error.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
