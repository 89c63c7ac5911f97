//! Error types.
//!
//! Scheduling itself never fails: infeasible plans are reported through
//! warning codes. Errors only arise at the boundaries (parsing requests,
//! validating task lists, loading kitchen profiles).

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised at the scheduling boundary.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The task list failed validation.
    #[error("invalid task list: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// The request body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kitchen profile loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the profile file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The profile describes impossible equipment.
    #[error("Invalid kitchen profile: {0}")]
    Invalid(String),
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for boundary operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
