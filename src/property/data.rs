//! Property scenario inputs

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Result};
use crate::loan::LoanParameters;

/// A rental property bought with a mortgage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProperty {
    pub purchase_price: f64,
    pub loan: LoanParameters,
    pub monthly_rent: f64,
    /// Operating expenses (taxes, insurance, maintenance, management)
    pub monthly_expenses: f64,
    pub monthly_pmi: f64,
}

impl InvestmentProperty {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("investment.purchase_price", self.purchase_price)?;
        ensure_non_negative("investment.monthly_rent", self.monthly_rent)?;
        ensure_non_negative("investment.monthly_expenses", self.monthly_expenses)?;
        ensure_non_negative("investment.monthly_pmi", self.monthly_pmi)?;
        self.loan.validate()
    }

    /// Mortgage payment plus expenses plus PMI
    pub fn total_monthly_cost(&self, monthly_payment: f64) -> f64 {
        monthly_payment + self.monthly_expenses + self.monthly_pmi
    }
}

impl Default for InvestmentProperty {
    fn default() -> Self {
        Self {
            purchase_price: 539_000.0,
            loan: LoanParameters::new(480_000.0, 0.065, 30),
            monthly_rent: 3_600.0,
            monthly_expenses: 1_000.0,
            monthly_pmi: 200.0,
        }
    }
}

/// An owner-occupied home; no rent or operating expenses are modeled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimaryResidence {
    pub purchase_price: f64,
    pub loan: LoanParameters,
    pub monthly_pmi: f64,
}

impl PrimaryResidence {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("primary.purchase_price", self.purchase_price)?;
        ensure_non_negative("primary.monthly_pmi", self.monthly_pmi)?;
        self.loan.validate()
    }

    pub fn total_monthly_cost(&self, monthly_payment: f64) -> f64 {
        monthly_payment + self.monthly_pmi
    }
}

impl Default for PrimaryResidence {
    fn default() -> Self {
        Self {
            purchase_price: 620_000.0,
            loan: LoanParameters::new(620_000.0, 0.063, 30),
            monthly_pmi: 90.0,
        }
    }
}

/// Both scenarios compared side by side
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInputs {
    #[serde(default)]
    pub investment: InvestmentProperty,
    #[serde(default)]
    pub primary: PrimaryResidence,
}

impl AnalysisInputs {
    pub fn new(investment: InvestmentProperty, primary: PrimaryResidence) -> Self {
        Self { investment, primary }
    }

    pub fn validate(&self) -> Result<()> {
        self.investment.validate()?;
        self.primary.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn test_defaults() {
        let inputs = AnalysisInputs::default();
        assert_eq!(inputs.investment.purchase_price, 539_000.0);
        assert_eq!(inputs.investment.loan.principal, 480_000.0);
        assert_eq!(inputs.investment.loan.annual_rate, 0.065);
        assert_eq!(inputs.investment.monthly_rent, 3_600.0);
        assert_eq!(inputs.primary.purchase_price, 620_000.0);
        assert_eq!(inputs.primary.loan.annual_rate, 0.063);
        assert_eq!(inputs.primary.monthly_pmi, 90.0);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_total_monthly_cost() {
        let investment = InvestmentProperty::default();
        assert_eq!(investment.total_monthly_cost(3_000.0), 4_200.0);

        let primary = PrimaryResidence::default();
        assert_eq!(primary.total_monthly_cost(3_000.0), 3_090.0);
    }

    #[test]
    fn test_negative_rent_rejected() {
        let mut inputs = AnalysisInputs::default();
        inputs.investment.monthly_rent = -100.0;
        let err = inputs.validate().unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidParameter { name: "investment.monthly_rent", .. }
        ));
    }

    #[test]
    fn test_bad_primary_loan_rejected() {
        let mut inputs = AnalysisInputs::default();
        inputs.primary.loan.term_years = 0;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "investment": {
            "purchase_price": 400000.0,
            "loan": { "principal": 320000.0, "annual_rate": 0.07, "term_years": 15 },
            "monthly_rent": 2800.0,
            "monthly_expenses": 600.0,
            "monthly_pmi": 0.0
        } }"#;
        let inputs: AnalysisInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.investment.loan.term_years, 15);
        assert_eq!(inputs.primary, PrimaryResidence::default());
    }
}
