use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::error::LoanEngineError;
use crate::rounding::round_to_cents;
use crate::types::{BasisPoints, Cents};
use crate::LoanEngineResult;

/// Basis-point scale (10_000) times twelve monthly periods: dividing an
/// annual rate in basis points by this yields the decimal monthly rate.
pub(crate) const MONTHLY_RATE_DIVISOR: Decimal = dec!(120_000);

/// Fixed level payment that fully amortizes `principal` over `term_months`
/// at the given annual rate.
///
/// Standard annuity formula, computed in `Decimal` end to end:
///
/// ```text
/// payment = principal * i / (1 - (1 + i)^-n)      i = rate / 120_000
/// ```
///
/// A zero rate degenerates to straight-line `principal / term_months`; a
/// zero principal always yields a zero payment. The result is rounded to
/// the nearest cent, halves away from zero.
pub fn compute_payment(
    principal: Cents,
    annual_rate_bps: BasisPoints,
    term_months: u32,
) -> LoanEngineResult<Cents> {
    validate(principal, annual_rate_bps, term_months)?;

    if principal == 0 {
        return Ok(0);
    }

    let monthly_rate = Decimal::from(annual_rate_bps) / MONTHLY_RATE_DIVISOR;
    if monthly_rate.is_zero() {
        return round_to_cents(
            Decimal::from(principal) / Decimal::from(term_months),
            "zero-rate payment",
        );
    }

    let growth = (Decimal::ONE + monthly_rate).powi(term_months as i64);
    let annuity_factor = Decimal::ONE - Decimal::ONE / growth;

    round_to_cents(
        Decimal::from(principal) * monthly_rate / annuity_factor,
        "level payment",
    )
}

fn validate(principal: Cents, annual_rate_bps: BasisPoints, term_months: u32) -> LoanEngineResult<()> {
    if term_months == 0 {
        return Err(LoanEngineError::InvalidTerm { term: 0 });
    }
    if principal < 0 {
        return Err(LoanEngineError::NegativeInput {
            field: "principal".into(),
            reason: "Principal cannot be negative.".into(),
        });
    }
    if annual_rate_bps < 0 {
        return Err(LoanEngineError::NegativeInput {
            field: "rate".into(),
            reason: "Annual rate cannot be negative.".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_principal_pays_nothing() {
        assert_eq!(compute_payment(0, 400, 120).unwrap(), 0);
    }

    #[test]
    fn test_ten_year_loan_at_four_percent() {
        // $500,000.00 at 4.00% over 120 months => $5,062.26/month
        assert_eq!(compute_payment(50_000_000, 400, 120).unwrap(), 506226);
    }

    #[test]
    fn test_thirty_year_loan_at_six_percent() {
        // $500,000.00 at 6.00% over 360 months => $2,997.75/month
        assert_eq!(compute_payment(50_000_000, 600, 360).unwrap(), 299775);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        // 120_000 cents over 24 months, no interest => 5_000/month
        assert_eq!(compute_payment(120_000, 0, 24).unwrap(), 5_000);
        // Non-divisible principal rounds to the nearest cent
        assert_eq!(compute_payment(100, 0, 3).unwrap(), 33);
    }

    #[test]
    fn test_zero_term_rejected() {
        let err = compute_payment(50_000_000, 400, 0).unwrap_err();
        assert_eq!(err, LoanEngineError::InvalidTerm { term: 0 });
    }

    #[test]
    fn test_negative_principal_rejected() {
        assert!(matches!(
            compute_payment(-1, 400, 120),
            Err(LoanEngineError::NegativeInput { .. })
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(matches!(
            compute_payment(50_000_000, -400, 120),
            Err(LoanEngineError::NegativeInput { .. })
        ));
    }
}
