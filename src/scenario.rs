//! Scenario runner for batch and sensitivity projections
//!
//! Holds one set of inputs and runs it under many configurations (or many
//! inputs under one configuration), fanning independent projections out
//! across threads.

use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::projection::{PrincipalModel, ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionSummary};
use crate::property::AnalysisInputs;

/// One cell of a sensitivity grid
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SensitivityPoint {
    pub appreciation_rate: f64,
    pub principal_fraction: f64,
    pub summary: ProjectionSummary,
}

/// Runner with pre-set base inputs
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for rate in [0.02, 0.03, 0.04] {
///     let config = ProjectionConfig { appreciation_rate: rate, ..Default::default() };
///     let result = runner.run(config)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_inputs: AnalysisInputs,
}

impl ScenarioRunner {
    /// Create runner with the default comparison inputs
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(inputs: AnalysisInputs) -> Self {
        Self { base_inputs: inputs }
    }

    /// Run a single projection with the given config
    pub fn run(&self, config: ProjectionConfig) -> Result<ProjectionResult> {
        ProjectionEngine::new(config).project_inputs(&self.base_inputs)
    }

    /// Run multiple configs against the base inputs; results keep the order of `configs`
    pub fn run_scenarios(&self, configs: &[ProjectionConfig]) -> Result<Vec<ProjectionResult>> {
        configs
            .par_iter()
            .map(|config| self.run(*config))
            .collect()
    }

    /// Run many input sets under one config
    pub fn run_batch(
        &self,
        inputs: &[AnalysisInputs],
        config: ProjectionConfig,
    ) -> Result<Vec<ProjectionResult>> {
        let engine = ProjectionEngine::new(config);
        inputs
            .par_iter()
            .map(|i| engine.project_inputs(i))
            .collect()
    }

    /// Full grid of appreciation rate x principal fraction, row-major by appreciation rate
    pub fn sensitivity(
        &self,
        appreciation_rates: &[f64],
        principal_fractions: &[f64],
        horizon_years: u32,
    ) -> Result<Vec<SensitivityPoint>> {
        let grid: Vec<(f64, f64)> = appreciation_rates
            .iter()
            .flat_map(|&a| principal_fractions.iter().map(move |&f| (a, f)))
            .collect();

        info!("Running sensitivity grid of {} scenarios", grid.len());

        grid.par_iter()
            .map(|&(appreciation_rate, principal_fraction)| {
                let config = ProjectionConfig {
                    horizon_years,
                    appreciation_rate,
                    principal_model: PrincipalModel::FixedFraction(principal_fraction),
                };
                let result = self.run(config)?;
                Ok(SensitivityPoint {
                    appreciation_rate,
                    principal_fraction,
                    summary: result.summary(),
                })
            })
            .collect()
    }

    pub fn inputs(&self) -> &AnalysisInputs {
        &self.base_inputs
    }

    /// Get mutable reference to base inputs for customization
    pub fn inputs_mut(&mut self) -> &mut AnalysisInputs {
        &mut self.base_inputs
    }
}
