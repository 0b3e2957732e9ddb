//! Property Analysis - cash flow and equity projections for an investment
//! property versus a primary residence
//!
//! This library provides:
//! - Fixed-rate mortgage payments and full amortization tables
//! - Year-by-year projection of cash flow, loan balance, value and equity
//! - Batch and sensitivity runs across inputs and assumptions
//! - CSV / console reporting of projection results

pub mod error;
pub mod loan;
pub mod property;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::AnalysisError;
pub use loan::{monthly_payment, AmortizationSchedule, LoanParameters};
pub use property::{AnalysisInputs, InvestmentProperty, PrimaryResidence};
pub use projection::{PrincipalModel, ProjectionConfig, ProjectionEngine, ProjectionResult, YearlyRecord};
pub use scenario::ScenarioRunner;
