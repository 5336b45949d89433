//! Periodic payment solver.

use crate::amount::Amount;
use log::debug;

/// Computes the fixed periodic payment that amortizes `amount` over `length`
/// periods at `rate` per period.
///
/// Uses the annuity formula `P * r * (1 + 1 / ((1 + r)^n - 1))`, or plain
/// division when the rate is zero, rounded once to the currency's precision.
///
/// The result always exceeds one period's interest on the full principal and
/// is never below one smallest unit, so every term of the schedule strictly
/// reduces the balance. Negative and tiny rates depend on this: the formula
/// alone can yield a zero or negative payment for them.
pub fn solve_for_payment(amount: Amount, rate: f64, length: u32) -> Amount {
    let principal = amount.to_float();
    let payment = if rate == 0.0 {
        amount.from_float(principal / f64::from(length))
    } else {
        let growth = (1.0 + rate).powf(f64::from(length));
        amount.from_float(principal * rate * (1.0 + 1.0 / (growth - 1.0)))
    };

    let mut scaled = payment.to_int();
    if scaled <= 0 {
        debug!(
            "Payment {} for {} at rate {} is not positive, raising to one unit",
            payment, amount, rate
        );
        scaled = 1;
    }
    let interest_only = amount.from_float(principal * rate).to_int();
    if scaled <= interest_only {
        debug!(
            "Payment {} does not cover interest {} on {}, raising past it",
            amount.from_int(scaled),
            amount.from_int(interest_only),
            amount
        );
        scaled = interest_only + 1;
    }
    amount.from_int(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::lookup;

    fn usd(x: f64) -> Amount {
        lookup("USD").from_float(x)
    }

    #[test]
    fn test_zero_rate_divides() {
        assert_eq!(solve_for_payment(usd(1000.0), 0.0, 3).to_string(), "333.33");
        assert_eq!(solve_for_payment(usd(1200.0), 0.0, 12).to_string(), "100.00");
    }

    #[test]
    fn test_zero_rate_small_amount_still_pays() {
        let payment = solve_for_payment(usd(0.01), 0.0, 3);
        assert_eq!(payment.to_int(), 1);
    }

    #[test]
    fn test_standard_payment() {
        assert_eq!(solve_for_payment(usd(238000.0), 0.04 / 12.0, 360).to_string(), "1136.25");
        assert_eq!(solve_for_payment(usd(1200.0), 0.01, 12).to_string(), "106.62");
    }

    #[test]
    fn test_payment_raised_above_interest_only() {
        // The formula rounds to exactly the interest charge here.
        assert_eq!(solve_for_payment(usd(238000.0), 0.05, 360).to_string(), "11900.01");
    }

    #[test]
    fn test_negative_rate_payment_is_one_unit() {
        assert_eq!(solve_for_payment(usd(238000.0), -0.05, 360).to_string(), "0.01");
    }

    #[test]
    fn test_single_period_pays_everything() {
        let payment = solve_for_payment(usd(500.0), 0.1, 1);
        assert_eq!(payment.to_string(), "550.00");
    }

    #[test]
    fn test_keeps_currency() {
        let jpy = lookup("JPY").from_float(100000.0);
        let payment = solve_for_payment(jpy, 0.0, 3);
        assert_eq!(payment.currency(), "JPY");
        assert_eq!(payment.to_string(), "33333");
    }
}
