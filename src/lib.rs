//! # Loan Amortization
//!
//! Fixed-point money and loan amortization schedules.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: amounts are scaled integers at their currency's precision
//! - **Round once**: floats are rounded half up when converted, sums stay on integers
//! - **Exact payoff**: every schedule ends with a balance of exactly zero
//! - **Strict invariants**: `payment == principal + interest` for every term
//!
//! ## Example
//!
//! ```
//! use loan_amortization::{lookup, Loan, LoanSpec};
//!
//! let usd = lookup("USD");
//! let spec = LoanSpec::new(0.04 / 12.0)
//!     .with_amount(usd.from_float(238000.0))
//!     .with_length(360);
//! let loan = Loan::new(&spec, true).unwrap();
//!
//! assert_eq!(loan.payment().to_string(), "1136.25");
//! assert_eq!(loan.terms().last().unwrap().balance().to_int(), 0);
//! ```

pub mod amount;
pub mod currency;
pub mod error;
pub mod loan;
pub mod schedule;
pub mod solver;

pub use amount::Amount;
pub use currency::{lookup, Currency};
pub use error::{LoanError, Result};
pub use loan::{Field, Loan, LoanSpec};
pub use schedule::Term;
pub use solver::solve_for_payment;
