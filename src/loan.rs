//! Loan specifications and solved loans.
//!
//! A [`LoanSpec`] leaves exactly one of amount, length or payment unknown.
//! [`Loan::new`] validates it, solves for the unknown and optionally builds
//! the amortization schedule.

use crate::amount::Amount;
use crate::error::{LoanError, Result};
use crate::schedule::{self, Term};
use crate::solver::solve_for_payment;
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

/// The fields of a [`LoanSpec`] that may be left unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Amount,
    Length,
    Payment,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Amount => "amount",
            Field::Length => "length",
            Field::Payment => "payment",
        };
        f.write_str(name)
    }
}

/// A loan request. `None` marks the field to solve for.
///
/// The rate is always required and is the fraction charged per period, so a
/// 4% annual rate paid monthly is `0.04 / 12.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LoanSpec {
    /// Principal borrowed.
    pub amount: Option<Amount>,

    /// Interest rate per period. May be zero or negative.
    pub rate: f64,

    /// Number of periods.
    pub length: Option<i32>,

    /// Fixed payment per period.
    pub payment: Option<Amount>,
}

impl LoanSpec {
    /// Creates a spec at `rate` per period with every other field unknown.
    pub fn new(rate: f64) -> Self {
        LoanSpec {
            rate,
            ..LoanSpec::default()
        }
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_length(mut self, length: i32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_payment(mut self, payment: Amount) -> Self {
        self.payment = Some(payment);
        self
    }

    /// Checks the spec and returns the field left unknown.
    ///
    /// Fields are checked in the order amount, length, payment. The first
    /// problem found is reported, so a non-positive amount wins over a second
    /// missing field that appears after it.
    pub fn validate(&self) -> Result<Field> {
        let mut unknown = None;

        match self.amount {
            Some(amount) if !amount.is_positive() => {
                return Err(LoanError::NeedsPositiveAmount {
                    field: Field::Amount,
                })
            }
            Some(_) => {}
            None => unknown = Some(Field::Amount),
        }

        match self.length {
            Some(length) if length <= 0 => return Err(LoanError::NeedsPositiveLength),
            Some(_) => {}
            None if unknown.is_some() => return Err(LoanError::NeedsExactlyOneUnknown),
            None => unknown = Some(Field::Length),
        }

        match self.payment {
            Some(payment) if !payment.is_positive() => {
                return Err(LoanError::NeedsPositiveAmount {
                    field: Field::Payment,
                })
            }
            Some(_) => {}
            None if unknown.is_some() => return Err(LoanError::NeedsExactlyOneUnknown),
            None => unknown = Some(Field::Payment),
        }

        let unknown = unknown.ok_or(LoanError::NeedsExactlyOneUnknown)?;
        if !self.rate.is_finite() {
            return Err(LoanError::NeedsFiniteRate);
        }
        Ok(unknown)
    }
}

/// A solved loan with every field known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loan {
    amount: Amount,
    rate: f64,
    length: u32,
    payment: Amount,
    terms: Vec<Term>,
}

impl Loan {
    /// Solves `spec` and, if `compute_terms` is set, builds its schedule.
    ///
    /// Only specs whose unknown is the payment can be solved. Specs leaving
    /// the amount or length unknown are valid but return
    /// [`LoanError::NotSupported`].
    pub fn new(spec: &LoanSpec, compute_terms: bool) -> Result<Loan> {
        let unknown = spec.validate().map_err(|e| {
            debug!("Rejected loan spec {:?}: {}", spec, e);
            e
        })?;

        let (amount, length) = match (unknown, spec.amount, spec.length) {
            (Field::Payment, Some(amount), Some(length)) => (amount, length),
            _ => {
                warn!("Cannot solve loan for its {}", unknown);
                return Err(LoanError::NotSupported { unknown });
            }
        };
        let length = u32::try_from(length).map_err(|_| LoanError::NeedsPositiveLength)?;

        let mut loan = Loan {
            amount,
            rate: spec.rate,
            length,
            payment: solve_for_payment(amount, spec.rate, length),
            terms: Vec::new(),
        };
        if compute_terms {
            loan.compute_terms();
        }
        Ok(loan)
    }

    /// Builds the amortization schedule, replacing any already computed.
    pub fn compute_terms(&mut self) {
        self.terms = schedule::generate(self.amount, self.rate, self.payment);
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn payment(&self) -> Amount {
        self.payment
    }

    /// The schedule, empty unless terms were computed. It may be shorter or
    /// longer than `length` when rounding moves the payoff.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Interest charged over the computed schedule.
    pub fn total_interest(&self) -> Amount {
        self.amount
            .from_int(0)
            .sum_with(self.terms.iter().map(Term::interest))
    }

    /// Sum of all payments over the computed schedule.
    pub fn total_paid(&self) -> Amount {
        self.amount
            .from_int(0)
            .sum_with(self.terms.iter().map(Term::payment))
    }
}
