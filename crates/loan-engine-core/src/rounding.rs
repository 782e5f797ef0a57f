use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::LoanEngineError;
use crate::types::Cents;
use crate::LoanEngineResult;

/// Round a decimal amount to the nearest whole cent, halves away from zero.
///
/// Every division in the engine funnels through here: the payment formula
/// and the per-month interest computation must round identically or the
/// final period fails to zero out the balance.
pub fn round_to_cents(value: Decimal, context: &str) -> LoanEngineResult<Cents> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| LoanEngineError::AmountOutOfRange {
            context: context.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(round_to_cents(dec!(2.5), "test").unwrap(), 3);
        assert_eq!(round_to_cents(dec!(-2.5), "test").unwrap(), -3);
        assert_eq!(round_to_cents(dec!(2.4999), "test").unwrap(), 2);
        assert_eq!(round_to_cents(dec!(2.5001), "test").unwrap(), 3);
    }

    #[test]
    fn test_whole_values_pass_through() {
        assert_eq!(round_to_cents(dec!(0), "test").unwrap(), 0);
        assert_eq!(round_to_cents(dec!(506226), "test").unwrap(), 506226);
    }
}
