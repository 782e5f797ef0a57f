use rust_decimal::Decimal;

use crate::amortization::payment::{compute_payment, MONTHLY_RATE_DIVISOR};
use crate::error::LoanEngineError;
use crate::rounding::round_to_cents;
use crate::types::{BasisPoints, Cents, Loan, ScheduleMonth};
use crate::LoanEngineResult;

/// Interest accrued on `remaining_balance` over one month at the given
/// annual rate, rounded to the nearest cent.
pub fn monthly_interest(
    remaining_balance: Cents,
    annual_rate_bps: BasisPoints,
) -> LoanEngineResult<Cents> {
    if annual_rate_bps < 0 {
        return Err(LoanEngineError::NegativeInput {
            field: "rate".into(),
            reason: "Annual rate cannot be negative.".into(),
        });
    }
    round_to_cents(
        Decimal::from(remaining_balance) * Decimal::from(annual_rate_bps) / MONTHLY_RATE_DIVISOR,
        "monthly interest",
    )
}

/// Full amortization schedule for a loan: exactly `loan.term` periods,
/// freshly computed on every call.
///
/// The level payment is computed once; each period then splits it into
/// interest on the running balance and a principal portion that reduces the
/// balance. Per-cent rounding drifts the balance a little each period, so
/// the final period folds whatever residue remains into its own payment and
/// principal, forcing the balance to land on exactly zero.
pub fn generate_schedule(loan: &Loan) -> LoanEngineResult<Vec<ScheduleMonth>> {
    let monthly_payment = compute_payment(loan.amount, loan.rate, loan.term)?;

    let mut schedule = Vec::with_capacity(loan.term as usize);
    let mut remaining_balance = loan.amount;

    for month in 1..=loan.term {
        let interest_payment = monthly_interest(remaining_balance, loan.rate)?;
        let mut principal_payment = monthly_payment - interest_payment;
        let mut payment_this_month = monthly_payment;
        remaining_balance -= principal_payment;

        if month == loan.term {
            payment_this_month += remaining_balance;
            principal_payment += remaining_balance;
            remaining_balance = 0;
        }

        schedule.push(ScheduleMonth {
            month,
            interest_payment,
            principal_payment,
            monthly_payment: payment_this_month,
            remaining_balance,
        });
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_loan() -> Loan {
        // $100,000.00 at 4.00% over 24 months
        Loan {
            id: 1,
            amount: 10_000_000,
            rate: 400,
            term: 24,
        }
    }

    #[test]
    fn test_monthly_interest_known_answers() {
        assert_eq!(monthly_interest(0, 50).unwrap(), 0);
        // 50_000_000 * 475 / 120_000 = 197_916.66... => 197_917
        assert_eq!(monthly_interest(50_000_000, 475).unwrap(), 197917);
        assert_eq!(monthly_interest(12_288_888, 901).unwrap(), 92269);
        // 70_000 * 200 / 120_000 = 116.66... => 117
        assert_eq!(monthly_interest(70_000, 200).unwrap(), 117);
    }

    #[test]
    fn test_first_month_split() {
        let schedule = generate_schedule(&sample_loan()).unwrap();
        let first = &schedule[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.interest_payment, 33333);
        assert_eq!(first.principal_payment, 400916);
        assert_eq!(first.monthly_payment, 434249);
        assert_eq!(first.remaining_balance, 9599084);
    }

    #[test]
    fn test_final_month_zeroes_out() {
        let schedule = generate_schedule(&sample_loan()).unwrap();
        let last = &schedule[23];
        assert_eq!(last.month, 24);
        assert_eq!(last.interest_payment, 1443);
        assert_eq!(last.principal_payment, 432814);
        // Residual rounding drift folded into the last payment
        assert_eq!(last.monthly_payment, 434257);
        assert_eq!(last.remaining_balance, 0);
    }

    #[test]
    fn test_schedule_length_matches_term() {
        let schedule = generate_schedule(&sample_loan()).unwrap();
        assert_eq!(schedule.len(), 24);
    }

    #[test]
    fn test_zero_rate_schedule() {
        let loan = Loan {
            id: 7,
            amount: 120_000,
            rate: 0,
            term: 12,
        };
        let schedule = generate_schedule(&loan).unwrap();
        assert_eq!(schedule.len(), 12);
        for entry in &schedule {
            assert_eq!(entry.interest_payment, 0);
            assert_eq!(entry.principal_payment, entry.monthly_payment);
        }
        assert_eq!(schedule[11].remaining_balance, 0);
    }

    #[test]
    fn test_zero_term_rejected() {
        let loan = Loan {
            id: 1,
            amount: 10_000_000,
            rate: 400,
            term: 0,
        };
        assert_eq!(
            generate_schedule(&loan).unwrap_err(),
            LoanEngineError::InvalidTerm { term: 0 }
        );
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(matches!(
            monthly_interest(50_000_000, -1),
            Err(LoanEngineError::NegativeInput { .. })
        ));
    }
}
