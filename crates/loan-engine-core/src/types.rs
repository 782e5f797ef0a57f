use serde::{Deserialize, Serialize};

/// All monetary values. Integer minor currency units (cents), never floats.
pub type Cents = i64;

/// Annual rates in basis points scaled by 100: rate / 10_000 is the decimal
/// annual rate, so 400 means 4.00%.
pub type BasisPoints = i64;

/// A loan as supplied by the caller. The id is opaque and plays no part in
/// the arithmetic; it is carried through to the summary output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    /// Principal in cents.
    pub amount: Cents,
    /// Annual nominal rate in basis points (400 = 4.00%).
    pub rate: BasisPoints,
    /// Term in monthly periods.
    pub term: u32,
}

/// One period of an amortization schedule.
///
/// `interest_payment + principal_payment == monthly_payment` for every
/// period; the final period absorbs accumulated rounding residue so that
/// `remaining_balance` lands on exactly zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMonth {
    /// 1-indexed period number.
    pub month: u32,
    pub interest_payment: Cents,
    pub principal_payment: Cents,
    pub monthly_payment: Cents,
    /// Balance outstanding after this period's principal is applied.
    pub remaining_balance: Cents,
}

/// Point-in-time totals for a loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub loan_id: i64,
    pub month: u32,
    pub principal_balance: Cents,
    pub aggregate_principal_paid: Cents,
    pub aggregate_interest_paid: Cents,
}
