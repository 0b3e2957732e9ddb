//! Property scenario inputs and loading

mod data;
pub mod loader;

pub use data::{AnalysisInputs, InvestmentProperty, PrimaryResidence};
pub use loader::{load_inputs_csv, load_inputs_csv_from_reader, load_inputs_json, load_inputs_json_from_reader};
