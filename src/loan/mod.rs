//! Loan amortization: fixed monthly payment and the full repayment table

mod payment;
mod schedule;

pub use payment::{monthly_payment, LoanParameters, MAX_TERM_YEARS};
pub use schedule::{AmortizationRow, AmortizationSchedule};
