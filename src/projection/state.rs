//! Per-scenario state carried from one projection year to the next

/// Property value and loan balance for one scenario at a year boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioState {
    /// Years simulated so far (0 = purchase date)
    pub year: u32,

    /// Current market value of the property
    pub property_value: f64,

    /// Outstanding loan balance. Not floored: the fixed-fraction model can
    /// overshoot below zero on long horizons.
    pub loan_balance: f64,
}

impl ScenarioState {
    /// State on the day of purchase
    pub fn at_purchase(purchase_price: f64, loan_principal: f64) -> Self {
        Self {
            year: 0,
            property_value: purchase_price,
            loan_balance: loan_principal,
        }
    }

    /// Roll forward one year: retire `principal_paid`, then compound the
    /// current value by `appreciation_rate`.
    #[must_use]
    pub fn advance_year(&self, principal_paid: f64, appreciation_rate: f64) -> Self {
        Self {
            year: self.year + 1,
            property_value: self.property_value * (1.0 + appreciation_rate),
            loan_balance: self.loan_balance - principal_paid,
        }
    }

    /// Property value minus outstanding balance
    pub fn equity(&self) -> f64 {
        self.property_value - self.loan_balance
    }
}
