//! Property Analysis CLI
//!
//! Projects investment-property cash flow and equity against a primary residence

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

use property_analysis::{
    property::{load_inputs_csv, load_inputs_json},
    projection::{ProjectionSummary, DEFAULT_HORIZON_YEARS},
    report, AnalysisInputs, InvestmentProperty, LoanParameters, PrimaryResidence, PrincipalModel,
    ProjectionConfig, ProjectionEngine, ScenarioRunner,
};

#[derive(Debug, Parser)]
#[command(
    name = "property_analysis",
    about = "Investment property and primary residence financial analysis"
)]
struct Cli {
    #[arg(long, default_value_t = 539000.0, help = "Investment property price ($)")]
    investment_price: f64,
    #[arg(long, default_value_t = 480000.0, help = "Investment loan amount ($)")]
    investment_loan: f64,
    #[arg(long, default_value_t = 6.5, help = "Investment interest rate in percent")]
    investment_rate: f64,
    #[arg(long, default_value_t = 30, help = "Investment loan term (years)")]
    investment_term: u32,
    #[arg(long, default_value_t = 3600.0, help = "Monthly rental income ($)")]
    monthly_rent: f64,
    #[arg(long, default_value_t = 1000.0, help = "Monthly operating expenses ($)")]
    monthly_expenses: f64,
    #[arg(long, default_value_t = 200.0, help = "Investment monthly PMI ($)")]
    investment_pmi: f64,

    #[arg(long, default_value_t = 620000.0, help = "Primary residence price ($)")]
    primary_price: f64,
    #[arg(long, default_value_t = 620000.0, help = "Primary loan amount ($)")]
    primary_loan: f64,
    #[arg(long, default_value_t = 6.3, help = "Primary interest rate in percent")]
    primary_rate: f64,
    #[arg(long, default_value_t = 30, help = "Primary loan term (years)")]
    primary_term: u32,
    #[arg(long, default_value_t = 90.0, help = "Primary monthly PMI ($)")]
    primary_pmi: f64,

    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS, help = "Years to project")]
    horizon_years: u32,
    #[arg(
        long,
        default_value_t = 3.0,
        help = "Annual property appreciation in percent"
    )]
    appreciation_rate: f64,
    #[arg(
        long,
        default_value_t = 30.0,
        help = "Share of annual mortgage payments applied to principal, in percent"
    )]
    principal_fraction: f64,
    #[arg(
        long,
        help = "Use the real amortization table instead of a fixed principal share"
    )]
    amortized: bool,

    #[arg(long, help = "JSON inputs file; replaces the individual property flags")]
    inputs: Option<PathBuf>,
    #[arg(
        long,
        conflicts_with = "inputs",
        help = "CSV of comparisons, one per row; prints one summary line per row"
    )]
    batch: Option<PathBuf>,
    #[arg(long, help = "Write yearly records (or batch summaries) to this CSV file")]
    output: Option<PathBuf>,
    #[arg(long, help = "Print the full result as JSON instead of a table")]
    json: bool,
}

impl Cli {
    fn analysis_inputs(&self) -> Result<AnalysisInputs> {
        if let Some(path) = &self.inputs {
            return load_inputs_json(path)
                .with_context(|| format!("failed to load inputs from {}", path.display()));
        }

        Ok(AnalysisInputs {
            investment: InvestmentProperty {
                purchase_price: self.investment_price,
                loan: LoanParameters::new(
                    self.investment_loan,
                    self.investment_rate / 100.0,
                    self.investment_term,
                ),
                monthly_rent: self.monthly_rent,
                monthly_expenses: self.monthly_expenses,
                monthly_pmi: self.investment_pmi,
            },
            primary: PrimaryResidence {
                purchase_price: self.primary_price,
                loan: LoanParameters::new(
                    self.primary_loan,
                    self.primary_rate / 100.0,
                    self.primary_term,
                ),
                monthly_pmi: self.primary_pmi,
            },
        })
    }

    fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            horizon_years: self.horizon_years,
            appreciation_rate: self.appreciation_rate / 100.0,
            principal_model: if self.amortized {
                PrincipalModel::Amortized
            } else {
                PrincipalModel::FixedFraction(self.principal_fraction / 100.0)
            },
        }
    }
}

/// Project every comparison in a CSV file under one configuration
fn run_batch(path: &Path, config: ProjectionConfig) -> Result<Vec<ProjectionSummary>> {
    let inputs = load_inputs_csv(path)
        .with_context(|| format!("failed to load batch from {}", path.display()))?;
    let results = ScenarioRunner::new()
        .run_batch(&inputs, config)
        .context("batch projection failed")?;
    Ok(results.iter().map(|r| r.summary()).collect())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if let Some(batch) = &cli.batch {
        let summaries = run_batch(batch, cli.projection_config())?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        } else {
            print!("{}", report::render_batch(&summaries));
        }
        if let Some(path) = &cli.output {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            report::write_summaries(file, &summaries)?;
            info!("Batch summaries written to {}", path.display());
        }
        return Ok(());
    }

    let inputs = cli.analysis_inputs()?;
    let config = cli.projection_config();

    let result = ProjectionEngine::new(config)
        .project_inputs(&inputs)
        .context("projection failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Investment Property and Primary Residence Financial Analysis");
        println!("============================================================\n");
        print!("{}", report::render_table(&result));
        println!();
        print!("{}", report::render_summary(&result.summary()));
    }

    if let Some(path) = &cli.output {
        report::write_csv(path, &result.records)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Yearly records written to {}", path.display());
    }

    Ok(())
}
