//! Month-by-month amortization table

use serde::{Deserialize, Serialize};

use super::payment::LoanParameters;
use crate::error::Result;

/// One month of the amortization table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment number (1-indexed)
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Balance after this payment
    pub balance: f64,
}

/// Full amortization table for a fixed-rate loan
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    loan: LoanParameters,
    monthly_payment: f64,
    rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Build the table for the full term of the loan
    pub fn new(loan: LoanParameters) -> Result<Self> {
        let monthly_payment = loan.monthly_payment()?;
        let monthly_rate = loan.monthly_rate();
        let n = loan.total_payments();

        let mut rows = Vec::with_capacity(n as usize);
        let mut balance = loan.principal;

        for month in 1..=n {
            let interest = balance * monthly_rate;
            // Final payment absorbs the rounding residue
            let principal = if month == n {
                balance
            } else {
                (monthly_payment - interest).min(balance)
            };
            balance -= principal;

            rows.push(AmortizationRow {
                month,
                payment: interest + principal,
                interest,
                principal,
                balance,
            });
        }

        Ok(Self {
            loan,
            monthly_payment,
            rows,
        })
    }

    pub fn loan(&self) -> &LoanParameters {
        &self.loan
    }

    pub fn monthly_payment(&self) -> f64 {
        self.monthly_payment
    }

    pub fn rows(&self) -> &[AmortizationRow] {
        &self.rows
    }

    /// Rows falling in the given loan year (1-indexed); empty past the term
    fn year_rows(&self, year: u32) -> &[AmortizationRow] {
        if year == 0 {
            return &[];
        }
        let start = (year as usize - 1).saturating_mul(12);
        let end = (year as usize).saturating_mul(12);
        if start >= self.rows.len() {
            return &[];
        }
        &self.rows[start..end.min(self.rows.len())]
    }

    /// Principal retired during the given loan year
    pub fn principal_paid_in_year(&self, year: u32) -> f64 {
        self.year_rows(year).iter().map(|r| r.principal).sum()
    }

    /// Interest charged during the given loan year
    pub fn interest_paid_in_year(&self, year: u32) -> f64 {
        self.year_rows(year).iter().map(|r| r.interest).sum()
    }

    /// Total payments made during the given loan year; zero once the loan is retired
    pub fn payments_in_year(&self, year: u32) -> f64 {
        self.year_rows(year).iter().map(|r| r.payment).sum()
    }

    /// Outstanding balance at the end of the given loan year
    pub fn balance_after_year(&self, year: u32) -> f64 {
        if year == 0 {
            return self.loan.principal;
        }
        let idx = (year as usize).saturating_mul(12).min(self.rows.len());
        self.rows.get(idx - 1).map(|r| r.balance).unwrap_or(0.0)
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn investment_loan() -> LoanParameters {
        LoanParameters::new(480_000.0, 0.065, 30)
    }

    #[test]
    fn test_schedule_length() {
        let schedule = AmortizationSchedule::new(investment_loan()).unwrap();
        assert_eq!(schedule.rows().len(), 360);
        assert_eq!(schedule.rows()[0].month, 1);
        assert_eq!(schedule.rows()[359].month, 360);
    }

    #[test]
    fn test_first_payment_split() {
        let schedule = AmortizationSchedule::new(investment_loan()).unwrap();
        let first = schedule.rows()[0];
        assert_abs_diff_eq!(first.interest, 2600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.principal, schedule.monthly_payment() - 2600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_loan_paid_off_at_term() {
        let schedule = AmortizationSchedule::new(investment_loan()).unwrap();
        let last = schedule.rows().last().unwrap();
        assert_eq!(last.balance, 0.0);
        assert_abs_diff_eq!(last.payment, schedule.monthly_payment(), epsilon = 1e-4);

        let principal: f64 = schedule.rows().iter().map(|r| r.principal).sum();
        assert_abs_diff_eq!(principal, 480_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_total_interest_matches_payments() {
        let schedule = AmortizationSchedule::new(investment_loan()).unwrap();
        let paid = schedule.monthly_payment() * 360.0;
        assert_abs_diff_eq!(schedule.total_interest(), paid - 480_000.0, epsilon = 1e-3);
    }

    #[test]
    fn test_yearly_sums() {
        let schedule = AmortizationSchedule::new(investment_loan()).unwrap();
        let year1 = schedule.principal_paid_in_year(1) + schedule.interest_paid_in_year(1);
        assert_abs_diff_eq!(year1, schedule.payments_in_year(1), epsilon = 1e-6);
        assert_abs_diff_eq!(schedule.payments_in_year(1), schedule.monthly_payment() * 12.0, epsilon = 1e-6);

        // Principal share grows as the balance falls
        assert!(schedule.principal_paid_in_year(30) > schedule.principal_paid_in_year(1));
        assert_abs_diff_eq!(
            schedule.balance_after_year(1),
            480_000.0 - schedule.principal_paid_in_year(1),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_nothing_due_after_term() {
        let schedule = AmortizationSchedule::new(LoanParameters::new(100_000.0, 0.05, 15)).unwrap();
        assert_eq!(schedule.payments_in_year(16), 0.0);
        assert_eq!(schedule.principal_paid_in_year(16), 0.0);
        assert_eq!(schedule.balance_after_year(16), 0.0);
        assert_eq!(schedule.balance_after_year(0), 100_000.0);
    }

    #[test]
    fn test_far_future_year_does_not_overflow() {
        let schedule = AmortizationSchedule::new(LoanParameters::new(100_000.0, 0.05, 15)).unwrap();
        assert_eq!(schedule.payments_in_year(u32::MAX), 0.0);
        assert_eq!(schedule.principal_paid_in_year(u32::MAX), 0.0);
        assert_eq!(schedule.balance_after_year(u32::MAX), 0.0);
    }

    #[test]
    fn test_overlong_term_rejected() {
        assert!(AmortizationSchedule::new(LoanParameters::new(100_000.0, 0.05, 400_000_000)).is_err());
    }

    #[test]
    fn test_zero_rate_schedule() {
        let schedule = AmortizationSchedule::new(LoanParameters::new(36_000.0, 0.0, 3)).unwrap();
        assert_eq!(schedule.total_interest(), 0.0);
        assert_abs_diff_eq!(schedule.principal_paid_in_year(1), 12_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(schedule.balance_after_year(3), 0.0, epsilon = 1e-9);
    }
}
