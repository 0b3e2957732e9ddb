//! Projection engine for the investment-versus-primary comparison

mod state;
mod engine;
mod cashflows;

pub use state::ScenarioState;
pub use engine::{
    project, PrincipalModel, ProjectionConfig, ProjectionEngine, DEFAULT_APPRECIATION_RATE,
    DEFAULT_HORIZON_YEARS, DEFAULT_PRINCIPAL_FRACTION, MAX_HORIZON_YEARS,
};
pub use cashflows::{ProjectionResult, ProjectionSummary, YearlyRecord};
