use crate::amortization::schedule::generate_schedule;
use crate::error::LoanEngineError;
use crate::types::{Loan, LoanSummary};
use crate::LoanEngineResult;

/// Cumulative view of a loan part-way through its life.
///
/// `month` addresses the schedule as a zero-based index, so the reported
/// window ends one period after the named month: `principal_balance` is the
/// balance after period `month + 1`, and the aggregates sum periods
/// `2..=month + 1`. Downstream consumers depend on these exact figures, so
/// the indexing must stay as is. Consequently `month` must lie in
/// `1..loan.term`; anything else is `InvalidMonth`.
pub fn summarize(loan: &Loan, month: u32) -> LoanEngineResult<LoanSummary> {
    let schedule = generate_schedule(loan)?;

    if month < 1 {
        return Err(LoanEngineError::InvalidMonth {
            month: month as i64,
            reason: "Month must be at least 1.".into(),
        });
    }
    let index = month as usize;
    if index >= schedule.len() {
        return Err(LoanEngineError::InvalidMonth {
            month: month as i64,
            reason: format!(
                "Month must be below the loan term of {} months.",
                loan.term
            ),
        });
    }

    let principal_balance = schedule[index].remaining_balance;
    let mut aggregate_principal_paid = 0;
    let mut aggregate_interest_paid = 0;
    for entry in &schedule[1..=index] {
        aggregate_principal_paid += entry.principal_payment;
        aggregate_interest_paid += entry.interest_payment;
    }

    Ok(LoanSummary {
        loan_id: loan.id,
        month,
        principal_balance,
        aggregate_principal_paid,
        aggregate_interest_paid,
    })
}
