pub mod payment;
pub mod schedule;
pub mod summary;

pub use payment::compute_payment;
pub use schedule::{generate_schedule, monthly_interest};
pub use summary::summarize;
