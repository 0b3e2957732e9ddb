//! Sweep appreciation rate and principal fraction over a set of inputs
//!
//! Outputs one CSV row per grid cell with the headline summary figures

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use property_analysis::{property::load_inputs_json, report, AnalysisInputs, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "sensitivity", about = "Appreciation x principal-fraction sensitivity grid")]
struct Args {
    #[arg(long, help = "JSON inputs file (defaults to the standard comparison)")]
    inputs: Option<PathBuf>,
    #[arg(long, default_value = "sensitivity_output.csv")]
    output: PathBuf,
    #[arg(long, default_value_t = 30)]
    horizon_years: u32,
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "0,1,2,3,4,5,6",
        help = "Appreciation rates in percent"
    )]
    appreciation: Vec<f64>,
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "10,20,30,40,50",
        help = "Principal fractions in percent"
    )]
    principal: Vec<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let inputs = match &args.inputs {
        Some(path) => load_inputs_json(path)
            .with_context(|| format!("failed to load inputs from {}", path.display()))?,
        None => AnalysisInputs::default(),
    };

    let appreciation: Vec<f64> = args.appreciation.iter().map(|p| p / 100.0).collect();
    let principal: Vec<f64> = args.principal.iter().map(|p| p / 100.0).collect();

    println!("Running {} scenarios...", appreciation.len() * principal.len());
    let grid = ScenarioRunner::with_inputs(inputs)
        .sensitivity(&appreciation, &principal, args.horizon_years)
        .context("sensitivity run failed")?;

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    report::write_sensitivity(file, &grid)?;
    println!("Output written to {}", args.output.display());

    if let Some(best) = grid.iter().max_by(|a, b| {
        a.summary
            .final_investment_equity
            .total_cmp(&b.summary.final_investment_equity)
    }) {
        println!(
            "Highest investment equity: {} at {:.1}% appreciation, {:.0}% principal",
            report::format_currency(best.summary.final_investment_equity),
            best.appreciation_rate * 100.0,
            best.principal_fraction * 100.0
        );
    }

    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
