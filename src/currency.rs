//! Currency table and zero-value lookup.
//!
//! Currencies are compile-time constants. Asking for a code that is not in
//! the table is a programming error and panics rather than returning an
//! error the caller could mistake for bad user input.

use crate::amount::Amount;
use std::fmt;

/// A supported currency: its ISO code and the number of fractional digits
/// its amounts carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    precision: u32,
}

/// Every currency the crate knows about. Adding a currency is adding a row.
const CURRENCIES: [Currency; 3] = [
    Currency::new("USD", 2),
    Currency::new("JPY", 0),
    Currency::new("EUR", 2),
];

impl Currency {
    const fn new(code: &'static str, precision: u32) -> Self {
        Currency { code, precision }
    }

    /// Finds a currency by its code, or `None` if it is not in the table.
    pub fn from_code(code: &str) -> Option<Currency> {
        CURRENCIES.iter().copied().find(|c| c.code == code)
    }

    /// The currency code, e.g. `"USD"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Number of fractional digits (2 for USD and EUR, 0 for JPY).
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Scaled units per whole unit of the currency (100 for cents).
    pub(crate) fn units_per_whole(&self) -> f64 {
        10_i64.pow(self.precision) as f64
    }

    /// Zero in this currency.
    pub fn zero(self) -> Amount {
        Amount::from_parts(0, self)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Returns zero in the currency named by `code`.
///
/// # Panics
///
/// Panics if `code` is not a supported currency. Only USD, JPY and EUR are
/// supported.
pub fn lookup(code: &str) -> Amount {
    match Currency::from_code(code) {
        Some(currency) => currency.zero(),
        None => panic!("Unknown currency {}", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_zero() {
        let usd = lookup("USD");
        assert_eq!(usd.to_int(), 0);
        assert_eq!(usd.currency(), "USD");
        assert_eq!(usd.to_string(), "0.00");

        let jpy = lookup("JPY");
        assert_eq!(jpy.to_string(), "0");
    }

    #[test]
    fn test_precisions() {
        assert_eq!(Currency::from_code("USD").unwrap().precision(), 2);
        assert_eq!(Currency::from_code("JPY").unwrap().precision(), 0);
        assert_eq!(Currency::from_code("EUR").unwrap().precision(), 2);
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Currency::from_code("usd").is_none());
        assert!(Currency::from_code("").is_none());
    }

    #[test]
    #[should_panic(expected = "Unknown currency ABC")]
    fn test_unknown_currency_panics() {
        lookup("ABC");
    }
}
