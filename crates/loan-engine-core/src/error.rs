use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoanEngineError {
    #[error("Invalid term: {term} — a loan must run for at least one month")]
    InvalidTerm { term: i64 },

    #[error("Invalid month: {month} — {reason}")]
    InvalidMonth { month: i64, reason: String },

    #[error("Negative input: {field} — {reason}")]
    NegativeInput { field: String, reason: String },

    #[error("Amount out of range in {context}")]
    AmountOutOfRange { context: String },
}
