//! Error types for loan construction.
//!
//! Unknown currency codes are not represented here: they panic in
//! [`crate::currency::lookup`] because they are programming errors.

use crate::loan::Field;
use thiserror::Error;

/// Result type alias for loan operations
pub type Result<T> = std::result::Result<T, LoanError>;

/// Errors returned when a loan specification cannot be solved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanError {
    /// Zero, or two or more, of amount, length and payment were left unknown
    #[error("LoanSpec must have exactly one unknown among amount, length and payment")]
    NeedsExactlyOneUnknown,

    /// A present amount or payment was zero or negative
    #[error("{field} must be positive when specified")]
    NeedsPositiveAmount { field: Field },

    /// A present length was zero or negative
    #[error("length must be positive")]
    NeedsPositiveLength,

    /// The rate was NaN or infinite
    #[error("rate must be a finite number")]
    NeedsFiniteRate,

    /// The spec is well formed but asks to solve for amount or length
    #[error("this loan cannot be computed: solving for {unknown} is not supported")]
    NotSupported { unknown: Field },
}
