//! Fixed-point monetary amounts.
//!
//! An [`Amount`] stores its value as an integer count of the currency's
//! smallest unit (cents for USD). Converting from a float rounds exactly once;
//! adding and subtracting happen on the integers so rounding error never
//! compounds.

use crate::currency::Currency;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// An amount of money in a particular currency.
///
/// Two amounts are equal when both their currency and scaled value match.
///
/// # Examples
///
/// ```
/// use loan_amortization::lookup;
///
/// let usd = lookup("USD");
/// let a = usd.from_float(3.53);
/// let b = usd.from_float(6.48);
/// assert_eq!(usd.from_int(a.to_int() + b.to_int()).to_string(), "10.01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Amount {
    scaled: i64,
    currency: Currency,
}

impl Amount {
    pub(crate) fn from_parts(scaled: i64, currency: Currency) -> Self {
        Amount { scaled, currency }
    }

    /// Returns a new amount for `x` in the same currency.
    ///
    /// Rounds half up at the currency's precision: `floor(x * 10^p + 0.5)`.
    /// Negative ties therefore round toward positive infinity (`-2.5` JPY
    /// becomes `-2`). Values beyond the range of `i64` saturate.
    pub fn from_float(&self, x: f64) -> Amount {
        let scaled = (x * self.currency.units_per_whole() + 0.5).floor() as i64;
        Amount::from_parts(scaled, self.currency)
    }

    /// Returns a new amount for the raw scaled value `x` in the same currency.
    pub fn from_int(&self, x: i64) -> Amount {
        Amount::from_parts(x, self.currency)
    }

    /// The amount as a float.
    pub fn to_float(&self) -> f64 {
        self.scaled as f64 / self.currency.units_per_whole()
    }

    /// The amount as a scaled integer. Use this to add or subtract without
    /// round off error.
    pub fn to_int(&self) -> i64 {
        self.scaled
    }

    /// The exact decimal value of this amount.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.scaled, self.currency.precision())
    }

    /// The currency code, e.g. `"USD"`.
    pub fn currency(&self) -> &'static str {
        self.currency.code()
    }

    /// Number of fractional digits this amount carries.
    pub fn precision(&self) -> u32 {
        self.currency.precision()
    }

    /// Returns `true` if the scaled value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.scaled > 0
    }

    /// Multiplies by `factor` and rounds once to the currency's precision,
    /// e.g. adding sales tax with `amount.scale(1.0825)`.
    pub fn scale(&self, factor: f64) -> Amount {
        self.from_float(self.to_float() * factor)
    }

    /// Sums this amount with `others` on the integer representation.
    ///
    /// # Panics
    ///
    /// Panics if any amount is in a different currency.
    pub fn sum_with<I>(self, others: I) -> Amount
    where
        I: IntoIterator<Item = Amount>,
    {
        others.into_iter().fold(self, |acc, x| acc + x)
    }

    fn assert_same_currency(&self, other: &Amount, op: &str) {
        assert!(
            self.currency == other.currency,
            "cannot {} amounts in different currencies ({} vs {})",
            op,
            self.currency,
            other.currency
        );
    }
}

impl fmt::Display for Amount {
    /// Renders exactly `precision` fractional digits, with a sign only when
    /// negative and no currency symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_currency(&rhs, "add");
        self.from_int(self.scaled + rhs.scaled)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.assert_same_currency(&rhs, "subtract");
        self.from_int(self.scaled - rhs.scaled)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.from_int(-self.scaled)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::currency::lookup;

    #[test]
    fn test_from_float_rounds_half_up() {
        let usd = lookup("USD");
        assert_eq!(usd.from_float(3.006).to_int(), 301);
        assert_eq!(usd.from_float(3.004).to_int(), 300);
        assert_eq!(usd.from_float(-3.006).to_int(), -301);
        assert_eq!(usd.from_float(-3.004).to_int(), -300);
    }

    #[test]
    fn test_negative_tie_rounds_toward_positive_infinity() {
        let jpy = lookup("JPY");
        assert_eq!(jpy.from_float(-2.5).to_int(), -2);
        assert_eq!(jpy.from_float(2.5).to_int(), 3);
    }

    #[test]
    fn test_display_precision() {
        let usd = lookup("USD");
        assert_eq!(usd.from_int(-1).to_string(), "-0.01");
        assert_eq!(usd.from_int(100).to_string(), "1.00");
        assert_eq!(usd.from_int(123456).to_string(), "1234.56");

        let jpy = lookup("JPY");
        assert_eq!(jpy.from_int(-702).to_string(), "-702");
        assert_eq!(jpy.from_int(0).to_string(), "0");
    }

    #[test]
    fn test_to_float() {
        let usd = lookup("USD");
        assert_eq!(usd.from_int(1050).to_float(), 10.5);
        assert_eq!(lookup("JPY").from_int(7).to_float(), 7.0);
    }

    #[test]
    fn test_arithmetic_on_integers() {
        let usd = lookup("USD");
        let a = usd.from_float(3.53);
        let b = usd.from_float(6.48);
        assert_eq!((a + b).to_string(), "10.01");
        assert_eq!((b - a).to_string(), "2.95");
        assert_eq!((-a).to_string(), "-3.53");
    }

    #[test]
    fn test_sum_with() {
        let eur = lookup("EUR");
        let total = eur.sum_with([eur.from_float(1.10), eur.from_float(2.20), eur.from_float(3.30)]);
        assert_eq!(total.to_string(), "6.60");
        assert_eq!(total.currency(), "EUR");
    }

    #[test]
    fn test_equality_includes_currency() {
        assert_ne!(lookup("USD").from_int(5), lookup("EUR").from_int(5));
        assert_eq!(lookup("USD").from_int(5), lookup("USD").from_float(0.05));
    }

    #[test]
    #[should_panic(expected = "different currencies")]
    fn test_mixed_currency_add_panics() {
        let _ = lookup("USD").from_int(1) + lookup("JPY").from_int(1);
    }

    #[test]
    fn test_serialize_as_string() {
        let amount = lookup("USD").from_float(-12.5);
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"-12.50\"");
    }
}
