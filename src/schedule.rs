//! Term-by-term amortization schedule.
//!
//! Balances are carried as scaled integers. Each term charges interest on the
//! remaining balance, rounded once, then applies the fixed payment. The final
//! term pays only what is left, so the last balance is exactly zero.

use crate::amount::Amount;
use log::{debug, trace};
use serde::Serialize;

/// One payment period of a loan.
///
/// # Invariants
///
/// - `payment == principal + interest` on scaled values
/// - `balance` is the previous balance minus `principal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Term {
    payment: Amount,
    interest: Amount,
    balance: Amount,
}

impl Term {
    /// The payment due for this term.
    pub fn payment(&self) -> Amount {
        self.payment
    }

    /// The amount going toward interest.
    pub fn interest(&self) -> Amount {
        self.interest
    }

    /// The balance left on the loan after this term.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// The amount going toward principal.
    pub fn principal(&self) -> Amount {
        self.payment - self.interest
    }
}

/// Generates terms for `amount` at `rate` per period with a fixed `payment`
/// until the balance reaches zero.
///
/// `payment` must be strictly greater than the interest charged on any
/// positive balance, as [`crate::solver::solve_for_payment`] guarantees;
/// otherwise the balance never shrinks and this does not return.
pub fn generate(amount: Amount, rate: f64, payment: Amount) -> Vec<Term> {
    let mut terms = Vec::new();
    let mut balance = amount;

    while balance.is_positive() {
        let interest = balance.from_float(balance.to_float() * rate);
        let owed = balance + interest;
        let paid = if payment.to_int() > owed.to_int() {
            trace!("Term {}: final payment capped at {}", terms.len() + 1, owed);
            owed
        } else {
            payment
        };
        balance = owed - paid;
        terms.push(Term {
            payment: paid,
            interest,
            balance,
        });
    }

    debug!(
        "Amortized {} at rate {} with payment {} over {} terms",
        amount,
        rate,
        payment,
        terms.len()
    );
    terms
}
