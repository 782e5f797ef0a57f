pub mod amortization;
pub mod error;
pub mod rounding;
pub mod types;

pub use error::LoanEngineError;
pub use types::*;

/// Standard result type for all loan-engine operations
pub type LoanEngineResult<T> = Result<T, LoanEngineError>;
