//! Error types for loan and projection calculations

use thiserror::Error;

/// Errors that can occur while validating inputs or running a projection
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("division by zero in {context}")]
    DivisionByZero { context: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        AnalysisError::InvalidParameter { name, value, reason }
    }

    /// True for errors caused by the numeric inputs rather than I/O
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidParameter { .. } | AnalysisError::DivisionByZero { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Reject NaN/infinite and negative amounts
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(AnalysisError::invalid(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(AnalysisError::invalid(name, value, "must be >= 0"));
    }
    Ok(())
}
