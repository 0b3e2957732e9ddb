//! Output formatting: CSV export, console table and summary lines

use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::projection::{ProjectionResult, ProjectionSummary, YearlyRecord};
use crate::scenario::SensitivityPoint;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CsvRecord {
    year: u32,
    investment_cash_flow: f64,
    investment_equity: f64,
    primary_equity: f64,
    investment_property_value: f64,
    investment_loan_balance: f64,
    primary_property_value: f64,
    primary_loan_balance: f64,
    primary_annual_cost: f64,
}

impl From<&YearlyRecord> for CsvRecord {
    fn from(r: &YearlyRecord) -> Self {
        Self {
            year: r.year,
            investment_cash_flow: r.investment_cash_flow,
            investment_equity: r.investment_equity,
            primary_equity: r.primary_equity,
            investment_property_value: r.investment_property_value,
            investment_loan_balance: r.investment_loan_balance,
            primary_property_value: r.primary_property_value,
            primary_loan_balance: r.primary_loan_balance,
            primary_annual_cost: r.primary_annual_cost,
        }
    }
}

/// Write yearly records as CSV to any writer
pub fn write_records<W: std::io::Write>(writer: W, records: &[YearlyRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(CsvRecord::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write yearly records to a CSV file
pub fn write_csv<P: AsRef<Path>>(path: P, records: &[YearlyRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_records(file, records)
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SensitivityCsvRecord {
    appreciation_rate: f64,
    principal_fraction: f64,
    total_investment_cash_flow: f64,
    final_investment_equity: f64,
    final_primary_equity: f64,
}

/// Write a sensitivity grid as CSV
pub fn write_sensitivity<W: std::io::Write>(writer: W, points: &[SensitivityPoint]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for p in points {
        csv_writer.serialize(SensitivityCsvRecord {
            appreciation_rate: p.appreciation_rate,
            principal_fraction: p.principal_fraction,
            total_investment_cash_flow: p.summary.total_investment_cash_flow,
            final_investment_equity: p.summary.final_investment_equity,
            final_primary_equity: p.summary.final_primary_equity,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Dollar amount with thousands separators, e.g. `$1,234.56` / `-$7,607.12`
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" would be noise
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Console table of every projection year
pub fn render_table(result: &ProjectionResult) -> String {
    let mut lines = vec![
        format!(
            "{:>4} {:>16} {:>18} {:>18}",
            "Year", "Cash Flow", "Investment Equity", "Primary Equity"
        ),
        "-".repeat(59),
    ];
    lines.extend(result.records.iter().map(|r| {
        format!(
            "{:>4} {:>16} {:>18} {:>18}",
            r.year,
            format_currency(r.investment_cash_flow),
            format_currency(r.investment_equity),
            format_currency(r.primary_equity),
        )
    }));
    join_lines(lines)
}

/// The three headline figures plus the monthly cost breakdown
pub fn render_summary(summary: &ProjectionSummary) -> String {
    let years = summary.years;
    join_lines(vec![
        format!(
            "Total Investment Cash Flow Over {years} Years: {}",
            format_currency(summary.total_investment_cash_flow)
        ),
        format!(
            "Total Investment Equity After {years} Years: {}",
            format_currency(summary.final_investment_equity)
        ),
        format!(
            "Total Primary Equity After {years} Years: {}",
            format_currency(summary.final_primary_equity)
        ),
        format!(
            "Monthly cost: investment {} (mortgage {}), primary {} (mortgage {})",
            format_currency(summary.investment_total_monthly_cost),
            format_currency(summary.investment_monthly_payment),
            format_currency(summary.primary_total_monthly_cost),
            format_currency(summary.primary_monthly_payment),
        ),
    ])
}

/// One line per batch scenario (1-indexed in input order)
pub fn render_batch(summaries: &[ProjectionSummary]) -> String {
    let mut lines = vec![
        format!(
            "{:>8} {:>18} {:>20} {:>20}",
            "Scenario", "Total Cash Flow", "Investment Equity", "Primary Equity"
        ),
        "-".repeat(69),
    ];
    lines.extend(summaries.iter().enumerate().map(|(i, s)| {
        format!(
            "{:>8} {:>18} {:>20} {:>20}",
            i + 1,
            format_currency(s.total_investment_cash_flow),
            format_currency(s.final_investment_equity),
            format_currency(s.final_primary_equity),
        )
    }));
    join_lines(lines)
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SummaryCsvRecord {
    scenario: usize,
    years: u32,
    total_investment_cash_flow: f64,
    final_investment_equity: f64,
    final_primary_equity: f64,
    investment_monthly_payment: f64,
    primary_monthly_payment: f64,
}

/// Write batch summaries as CSV, one row per scenario
pub fn write_summaries<W: std::io::Write>(writer: W, summaries: &[ProjectionSummary]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (i, s) in summaries.iter().enumerate() {
        csv_writer.serialize(SummaryCsvRecord {
            scenario: i + 1,
            years: s.years,
            total_investment_cash_flow: s.total_investment_cash_flow,
            final_investment_equity: s.final_investment_equity,
            final_primary_equity: s.final_primary_equity,
            investment_monthly_payment: s.investment_monthly_payment,
            primary_monthly_payment: s.primary_monthly_payment,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;
    use crate::property::AnalysisInputs;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1_155_958.5353), "$1,155,958.54");
        assert_eq!(format_currency(-7_607.118), "-$7,607.12");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(123_456.0), "$123,456.00");
    }

    #[test]
    fn test_write_records_csv() {
        let result = ProjectionEngine::default()
            .project_inputs(&AnalysisInputs::default())
            .unwrap();

        let mut buf = Vec::new();
        write_records(&mut buf, &result.records).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Year,InvestmentCashFlow,InvestmentEquity,PrimaryEquity,InvestmentPropertyValue,\
             InvestmentLoanBalance,PrimaryPropertyValue,PrimaryLoanBalance,PrimaryAnnualCost"
        );
        assert!(lines.next().unwrap().starts_with("1,"));
        assert_eq!(text.lines().count(), 31);
    }

    #[test]
    fn test_render_summary_lines() {
        let result = ProjectionEngine::default()
            .project_inputs(&AnalysisInputs::default())
            .unwrap();
        let text = render_summary(&result.summary());

        assert!(text.contains("Total Investment Cash Flow Over 30 Years: -$228,213.54"));
        assert!(text.contains("Total Investment Equity After 30 Years: $1,155,958.54"));
        assert!(text.contains("Total Primary Equity After 30 Years: $1,299,366.91"));
    }

    #[test]
    fn test_render_table_rows() {
        let result = ProjectionEngine::default()
            .project_inputs(&AnalysisInputs::default())
            .unwrap();
        let table = render_table(&result);
        // header + rule + 30 rows
        assert_eq!(table.lines().count(), 32);
        assert!(table.contains("-$7,607.12"));
    }

    #[test]
    fn test_batch_summaries() {
        let summary = ProjectionEngine::default()
            .project_inputs(&AnalysisInputs::default())
            .unwrap()
            .summary();
        let summaries = [summary, summary];

        let table = render_batch(&summaries);
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("$1,155,958.54"));

        let mut buf = Vec::new();
        write_summaries(&mut buf, &summaries).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(
            "Scenario,Years,TotalInvestmentCashFlow,FinalInvestmentEquity,FinalPrimaryEquity,\
             InvestmentMonthlyPayment,PrimaryMonthlyPayment\n"
        ));
        assert!(text.lines().nth(2).unwrap().starts_with("2,30,"));
    }

    #[test]
    fn test_write_sensitivity_header() {
        let grid = crate::scenario::ScenarioRunner::new()
            .sensitivity(&[0.03], &[0.3], 30)
            .unwrap();
        let mut buf = Vec::new();
        write_sensitivity(&mut buf, &grid).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(
            "AppreciationRate,PrincipalFraction,TotalInvestmentCashFlow,FinalInvestmentEquity,FinalPrimaryEquity\n"
        ));
        assert_eq!(text.lines().count(), 2);
    }
}
