//! Core projection engine for yearly cash flow and equity projections

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::cashflows::{ProjectionResult, YearlyRecord};
use super::state::ScenarioState;
use crate::error::{AnalysisError, Result};
use crate::loan::{AmortizationSchedule, LoanParameters};
use crate::property::{AnalysisInputs, InvestmentProperty, PrimaryResidence};

/// Default projection horizon (years)
pub const DEFAULT_HORIZON_YEARS: u32 = 30;

/// Longest accepted projection horizon (years)
pub const MAX_HORIZON_YEARS: u32 = 1_000;

/// Default annual property appreciation (3%)
pub const DEFAULT_APPRECIATION_RATE: f64 = 0.03;

/// Default share of each year's mortgage payments applied to principal (30%)
pub const DEFAULT_PRINCIPAL_FRACTION: f64 = 0.3;

/// How each year's mortgage payments are split between interest and principal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PrincipalModel {
    /// A flat share of the annual payment retires principal, every year,
    /// for the whole horizon (even past the loan term).
    FixedFraction(f64),
    /// Principal follows the real amortization table; payments stop once
    /// the loan is retired.
    Amortized,
}

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of years to project
    pub horizon_years: u32,

    /// Annual property appreciation, compounded on the running value
    pub appreciation_rate: f64,

    /// Principal repayment approach
    pub principal_model: PrincipalModel,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            appreciation_rate: DEFAULT_APPRECIATION_RATE,
            principal_model: PrincipalModel::FixedFraction(DEFAULT_PRINCIPAL_FRACTION),
        }
    }
}

impl ProjectionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.horizon_years == 0 {
            return Err(AnalysisError::invalid("horizon_years", 0.0, "must be > 0"));
        }
        if self.horizon_years > MAX_HORIZON_YEARS {
            return Err(AnalysisError::invalid(
                "horizon_years",
                self.horizon_years as f64,
                "must be <= 1000",
            ));
        }
        if !self.appreciation_rate.is_finite() || self.appreciation_rate <= -1.0 {
            return Err(AnalysisError::invalid(
                "appreciation_rate",
                self.appreciation_rate,
                "must be finite and > -1",
            ));
        }
        if let PrincipalModel::FixedFraction(fraction) = self.principal_model {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(AnalysisError::invalid(
                    "principal_fraction",
                    fraction,
                    "must be a fraction in [0, 1]",
                ));
            }
        }
        Ok(())
    }
}

/// Yearly mortgage outlay and principal reduction for one loan
enum Repayment {
    Fixed { monthly_payment: f64, fraction: f64 },
    Amortized(AmortizationSchedule),
}

impl Repayment {
    fn new(loan: LoanParameters, model: PrincipalModel) -> Result<Self> {
        Ok(match model {
            PrincipalModel::FixedFraction(fraction) => Repayment::Fixed {
                monthly_payment: loan.monthly_payment()?,
                fraction,
            },
            PrincipalModel::Amortized => Repayment::Amortized(AmortizationSchedule::new(loan)?),
        })
    }

    fn monthly_payment(&self) -> f64 {
        match self {
            Repayment::Fixed { monthly_payment, .. } => *monthly_payment,
            Repayment::Amortized(schedule) => schedule.monthly_payment(),
        }
    }

    /// Mortgage payments made during `year`
    fn payments_in_year(&self, year: u32) -> f64 {
        match self {
            Repayment::Fixed { monthly_payment, .. } => monthly_payment * 12.0,
            Repayment::Amortized(schedule) => schedule.payments_in_year(year),
        }
    }

    /// Principal retired during `year`
    fn principal_in_year(&self, year: u32) -> f64 {
        match self {
            Repayment::Fixed { monthly_payment, fraction } => monthly_payment * 12.0 * fraction,
            Repayment::Amortized(schedule) => schedule.principal_paid_in_year(year),
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection for a full set of inputs
    pub fn project_inputs(&self, inputs: &AnalysisInputs) -> Result<ProjectionResult> {
        self.project(&inputs.investment, &inputs.primary)
    }

    /// Project both scenarios year by year over the configured horizon
    pub fn project(
        &self,
        investment: &InvestmentProperty,
        primary: &PrimaryResidence,
    ) -> Result<ProjectionResult> {
        self.config.validate()?;
        investment.validate()?;
        primary.validate()?;

        let investment_repayment = Repayment::new(investment.loan, self.config.principal_model)?;
        let primary_repayment = Repayment::new(primary.loan, self.config.principal_model)?;

        let mut result = ProjectionResult::new(self.config);
        result.investment_monthly_payment = investment_repayment.monthly_payment();
        result.primary_monthly_payment = primary_repayment.monthly_payment();
        result.investment_total_monthly_cost =
            investment.total_monthly_cost(result.investment_monthly_payment);
        result.primary_total_monthly_cost =
            primary.total_monthly_cost(result.primary_monthly_payment);

        info!(
            "Projecting {} years: investment payment ${:.2}/mo, primary payment ${:.2}/mo",
            self.config.horizon_years,
            result.investment_monthly_payment,
            result.primary_monthly_payment
        );

        let mut investment_state =
            ScenarioState::at_purchase(investment.purchase_price, investment.loan.principal);
        let mut primary_state =
            ScenarioState::at_purchase(primary.purchase_price, primary.loan.principal);
        let mut overshoot_reported = false;

        for year in 1..=self.config.horizon_years {
            let investment_payments = investment_repayment.payments_in_year(year);
            let primary_payments = primary_repayment.payments_in_year(year);

            let investment_cash_flow = investment.monthly_rent * 12.0
                - (investment_payments
                    + (investment.monthly_expenses + investment.monthly_pmi) * 12.0);

            investment_state = investment_state.advance_year(
                investment_repayment.principal_in_year(year),
                self.config.appreciation_rate,
            );
            primary_state = primary_state.advance_year(
                primary_repayment.principal_in_year(year),
                self.config.appreciation_rate,
            );

            if !overshoot_reported
                && (investment_state.loan_balance < 0.0 || primary_state.loan_balance < 0.0)
            {
                warn!("Loan balance below zero in year {year}; principal fraction overshoots the loan");
                overshoot_reported = true;
            }

            let record = YearlyRecord {
                year,
                investment_cash_flow,
                investment_equity: investment_state.equity(),
                primary_equity: primary_state.equity(),
                investment_property_value: investment_state.property_value,
                investment_loan_balance: investment_state.loan_balance,
                primary_property_value: primary_state.property_value,
                primary_loan_balance: primary_state.loan_balance,
                primary_annual_cost: primary_payments + primary.monthly_pmi * 12.0,
            };
            debug!(
                "Year {:>2}: cash flow {:.2}, investment equity {:.2}, primary equity {:.2}",
                record.year,
                record.investment_cash_flow,
                record.investment_equity,
                record.primary_equity
            );
            result.add_record(record);
        }

        Ok(result)
    }
}

/// Project with an explicit configuration
pub fn project(
    investment: &InvestmentProperty,
    primary: &PrimaryResidence,
    config: ProjectionConfig,
) -> Result<ProjectionResult> {
    ProjectionEngine::new(config).project(investment, primary)
}
