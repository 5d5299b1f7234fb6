//! Error types for subdaily.

use thiserror::Error;

/// Main error type for forcing disaggregation.
#[derive(Error, Debug)]
pub enum ForcingError {
    /// Input the algorithm cannot operate on, e.g. non-increasing knot times.
    #[error("precondition violated in {operation}: {details}")]
    PreconditionViolation {
        operation: &'static str,
        details: String,
    },

    /// No usable source of data for a required quantity.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ForcingError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        ForcingError::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for subdaily operations.
pub type Result<T> = std::result::Result<T, ForcingError>;
