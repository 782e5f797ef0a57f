use clap::Args;
use serde_json::Value;

use loan_engine_core::amortization::{compute_payment, generate_schedule, summarize};
use loan_engine_core::Loan;

use crate::input;

/// Arguments for the fixed payment calculation
#[derive(Args)]
pub struct PaymentArgs {
    /// Principal in cents
    #[arg(long)]
    pub amount: i64,

    /// Annual rate in basis points (400 = 4.00%)
    #[arg(long)]
    pub rate: i64,

    /// Term in months
    #[arg(long)]
    pub term: u32,
}

/// Arguments for schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to a JSON loan file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan identifier (carried through to output)
    #[arg(long, default_value_t = 0)]
    pub id: i64,

    /// Principal in cents
    #[arg(long)]
    pub amount: Option<i64>,

    /// Annual rate in basis points (400 = 4.00%)
    #[arg(long)]
    pub rate: Option<i64>,

    /// Term in months
    #[arg(long)]
    pub term: Option<u32>,
}

/// Arguments for the loan summary
#[derive(Args)]
pub struct SummaryArgs {
    /// Path to a JSON loan file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan identifier (carried through to output)
    #[arg(long, default_value_t = 0)]
    pub id: i64,

    /// Principal in cents
    #[arg(long)]
    pub amount: Option<i64>,

    /// Annual rate in basis points (400 = 4.00%)
    #[arg(long)]
    pub rate: Option<i64>,

    /// Term in months
    #[arg(long)]
    pub term: Option<u32>,

    /// Month to summarize through
    #[arg(long)]
    pub month: u32,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payment = compute_payment(args.amount, args.rate, args.term)?;
    Ok(serde_json::json!({
        "amount": args.amount,
        "rate": args.rate,
        "term": args.term,
        "payment": payment,
    }))
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_loan(args.input.as_deref(), args.id, args.amount, args.rate, args.term)?;
    let schedule = generate_schedule(&loan)?;
    Ok(serde_json::to_value(schedule)?)
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_loan(args.input.as_deref(), args.id, args.amount, args.rate, args.term)?;
    if args.month > loan.term {
        return Err(format!(
            "month {} is higher than the loan term of {} months",
            args.month, loan.term
        )
        .into());
    }
    let summary = summarize(&loan, args.month)?;
    Ok(serde_json::to_value(summary)?)
}

/// Build the loan from a file, piped stdin, or individual flags, in that
/// order of precedence.
fn resolve_loan(
    path: Option<&str>,
    id: i64,
    amount: Option<i64>,
    rate: Option<i64>,
    term: Option<u32>,
) -> Result<Loan, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(input::file::read_json(path)?);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(Loan {
        id,
        amount: amount.ok_or("--amount is required (or provide --input)")?,
        rate: rate.ok_or("--rate is required (or provide --input)")?,
        term: term.ok_or("--term is required (or provide --input)")?,
    })
}
