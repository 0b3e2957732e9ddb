//! Yearly output rows and summary figures for a projection

use serde::{Deserialize, Serialize};

use super::engine::ProjectionConfig;

/// One projection year for both scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Rent minus mortgage, expenses and PMI for the year (may be negative)
    pub investment_cash_flow: f64,
    pub investment_equity: f64,
    pub primary_equity: f64,

    // End-of-year balances behind the equity figures
    pub investment_property_value: f64,
    pub investment_loan_balance: f64,
    pub primary_property_value: f64,
    pub primary_loan_balance: f64,

    /// Mortgage payments plus PMI on the primary residence (not netted from equity)
    pub primary_annual_cost: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Configuration the projection ran with
    pub config: ProjectionConfig,

    pub investment_monthly_payment: f64,
    pub primary_monthly_payment: f64,

    /// Mortgage payment + expenses + PMI
    pub investment_total_monthly_cost: f64,
    /// Mortgage payment + PMI
    pub primary_total_monthly_cost: f64,

    /// Yearly rows, ascending by year
    pub records: Vec<YearlyRecord>,
}

impl ProjectionResult {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            records: Vec::with_capacity(config.horizon_years as usize),
            config,
            investment_monthly_payment: 0.0,
            primary_monthly_payment: 0.0,
            investment_total_monthly_cost: 0.0,
            primary_total_monthly_cost: 0.0,
        }
    }

    /// Add a yearly row
    pub fn add_record(&mut self, record: YearlyRecord) {
        self.records.push(record);
    }

    pub fn final_record(&self) -> Option<&YearlyRecord> {
        self.records.last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_investment_cash_flow: f64 =
            self.records.iter().map(|r| r.investment_cash_flow).sum();
        let final_investment_equity = self.final_record().map(|r| r.investment_equity).unwrap_or(0.0);
        let final_primary_equity = self.final_record().map(|r| r.primary_equity).unwrap_or(0.0);

        ProjectionSummary {
            years: self.records.len() as u32,
            total_investment_cash_flow,
            final_investment_equity,
            final_primary_equity,
            investment_monthly_payment: self.investment_monthly_payment,
            primary_monthly_payment: self.primary_monthly_payment,
            investment_total_monthly_cost: self.investment_total_monthly_cost,
            primary_total_monthly_cost: self.primary_total_monthly_cost,
        }
    }
}

/// Headline figures for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub total_investment_cash_flow: f64,
    pub final_investment_equity: f64,
    pub final_primary_equity: f64,
    pub investment_monthly_payment: f64,
    pub primary_monthly_payment: f64,
    pub investment_total_monthly_cost: f64,
    pub primary_total_monthly_cost: f64,
}
