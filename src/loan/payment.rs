//! Fixed-rate mortgage payment calculation

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, AnalysisError, Result};

/// Longest accepted loan term (years)
pub const MAX_TERM_YEARS: u32 = 100;

/// Terms of a fixed-rate loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate as a fraction (0.065 = 6.5%)
    pub annual_rate: f64,

    /// Loan term in years
    pub term_years: u32,
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate: f64, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate,
            term_years,
        }
    }

    /// Number of monthly payments over the term
    pub fn total_payments(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    /// Check principal, rate and term against the accepted ranges
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("principal", self.principal)?;

        if !self.annual_rate.is_finite() {
            return Err(AnalysisError::invalid("annual_rate", self.annual_rate, "must be finite"));
        }
        if !(0.0..1.0).contains(&self.annual_rate) {
            return Err(AnalysisError::invalid(
                "annual_rate",
                self.annual_rate,
                "must be a fraction in [0, 1)",
            ));
        }
        if self.term_years == 0 {
            return Err(AnalysisError::invalid("term_years", 0.0, "must be > 0"));
        }
        if self.term_years > MAX_TERM_YEARS {
            return Err(AnalysisError::invalid(
                "term_years",
                self.term_years as f64,
                "must be <= 100",
            ));
        }
        Ok(())
    }

    /// Fixed monthly payment that retires the loan over its term
    pub fn monthly_payment(&self) -> Result<f64> {
        monthly_payment(self.principal, self.annual_rate, self.term_years)
    }
}

/// Standard amortization formula:
/// P * r * (1+r)^n / ((1+r)^n - 1) with r = annual_rate / 12 and n = term_years * 12.
///
/// A zero rate falls back to straight-line repayment `principal / n`.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_years: u32) -> Result<f64> {
    let loan = LoanParameters::new(principal, annual_rate, term_years);
    loan.validate()?;

    let n = loan.total_payments() as f64;
    if annual_rate == 0.0 {
        return Ok(principal / n);
    }

    let monthly_rate = loan.monthly_rate();
    // (1+r)^n - 1 via ln_1p/exp_m1 keeps precision for rates near zero
    let denominator = (n * monthly_rate.ln_1p()).exp_m1();
    let growth = denominator + 1.0;

    // Subnormal annual rates underflow to a zero monthly rate
    if denominator == 0.0 {
        return Err(AnalysisError::DivisionByZero {
            context: "amortization factor (1 + r)^n - 1",
        });
    }

    Ok(principal * monthly_rate * growth / denominator)
}
