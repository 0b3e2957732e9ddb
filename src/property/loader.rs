//! Load analysis inputs from JSON or CSV files

use super::{AnalysisInputs, InvestmentProperty, PrimaryResidence};
use crate::error::Result;
use crate::loan::LoanParameters;
use csv::Reader;
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw CSV row, one comparison per line. Rates are fractions (0.065 = 6.5%).
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "InvestmentPrice")]
    investment_price: f64,
    #[serde(rename = "InvestmentLoan")]
    investment_loan: f64,
    #[serde(rename = "InvestmentRate")]
    investment_rate: f64,
    #[serde(rename = "InvestmentTerm")]
    investment_term: u32,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: f64,
    #[serde(rename = "MonthlyExpenses")]
    monthly_expenses: f64,
    #[serde(rename = "InvestmentPMI")]
    investment_pmi: f64,
    #[serde(rename = "PrimaryPrice")]
    primary_price: f64,
    #[serde(rename = "PrimaryLoan")]
    primary_loan: f64,
    #[serde(rename = "PrimaryRate")]
    primary_rate: f64,
    #[serde(rename = "PrimaryTerm")]
    primary_term: u32,
    #[serde(rename = "PrimaryPMI")]
    primary_pmi: f64,
}

impl CsvRow {
    fn into_inputs(self) -> Result<AnalysisInputs> {
        let inputs = AnalysisInputs {
            investment: InvestmentProperty {
                purchase_price: self.investment_price,
                loan: LoanParameters::new(self.investment_loan, self.investment_rate, self.investment_term),
                monthly_rent: self.monthly_rent,
                monthly_expenses: self.monthly_expenses,
                monthly_pmi: self.investment_pmi,
            },
            primary: PrimaryResidence {
                purchase_price: self.primary_price,
                loan: LoanParameters::new(self.primary_loan, self.primary_rate, self.primary_term),
                monthly_pmi: self.primary_pmi,
            },
        };
        inputs.validate()?;
        Ok(inputs)
    }
}

/// Load a single set of inputs from a JSON file
pub fn load_inputs_json<P: AsRef<Path>>(path: P) -> Result<AnalysisInputs> {
    let file = File::open(path.as_ref())?;
    let inputs = load_inputs_json_from_reader(BufReader::new(file))?;
    info!("Loaded inputs from {}", path.as_ref().display());
    Ok(inputs)
}

/// Parse and validate inputs from any JSON reader
pub fn load_inputs_json_from_reader<R: std::io::Read>(reader: R) -> Result<AnalysisInputs> {
    let inputs: AnalysisInputs = serde_json::from_reader(reader)?;
    inputs.validate()?;
    Ok(inputs)
}

/// Load every comparison in a CSV file
pub fn load_inputs_csv<P: AsRef<Path>>(path: P) -> Result<Vec<AnalysisInputs>> {
    let file = File::open(path.as_ref())?;
    let inputs = load_inputs_csv_from_reader(file)?;
    info!("Loaded {} scenarios from {}", inputs.len(), path.as_ref().display());
    Ok(inputs)
}

/// Load comparisons from any CSV reader (e.g., string buffer)
pub fn load_inputs_csv_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<AnalysisInputs>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut all = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        all.push(row.into_inputs()?);
    }

    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    const HEADER: &str = "InvestmentPrice,InvestmentLoan,InvestmentRate,InvestmentTerm,MonthlyRent,MonthlyExpenses,InvestmentPMI,PrimaryPrice,PrimaryLoan,PrimaryRate,PrimaryTerm,PrimaryPMI";

    #[test]
    fn test_load_csv_rows() {
        let data = format!(
            "{HEADER}\n539000,480000,0.065,30,3600,1000,200,620000,620000,0.063,30,90\n400000,300000,0.07,15,2500,500,0,500000,400000,0.06,30,0\n"
        );
        let inputs = load_inputs_csv_from_reader(data.as_bytes()).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0], AnalysisInputs::default());
        assert_eq!(inputs[1].investment.loan.term_years, 15);
        assert_eq!(inputs[1].primary.loan.principal, 400_000.0);
    }

    #[test]
    fn test_csv_row_validated() {
        let data = format!("{HEADER}\n539000,480000,0.065,0,3600,1000,200,620000,620000,0.063,30,90\n");
        let err = load_inputs_csv_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidParameter { name: "term_years", .. }));
    }

    #[test]
    fn test_malformed_csv() {
        let data = format!("{HEADER}\nnot-a-number,480000,0.065,30,3600,1000,200,620000,620000,0.063,30,90\n");
        let err = load_inputs_csv_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalysisError::Csv(_)));
    }

    #[test]
    fn test_json_round_trip_of_defaults() {
        let json = serde_json::to_string(&AnalysisInputs::default()).unwrap();
        let inputs = load_inputs_json_from_reader(json.as_bytes()).unwrap();
        assert_eq!(inputs, AnalysisInputs::default());
    }

    #[test]
    fn test_json_rejects_negative_price() {
        let mut inputs = AnalysisInputs::default();
        inputs.primary.purchase_price = -1.0;
        let json = serde_json::to_string(&inputs).unwrap();
        assert!(load_inputs_json_from_reader(json.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_json_file() {
        let err = load_inputs_json("does/not/exist.json").unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
