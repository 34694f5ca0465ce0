//! Error types.
//!
//! Scoring and scheduling are total and never fail. Errors only arise
//! when reading a table, validating a batch, or checking a template.

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input has no header row")]
    MissingHeader,

    #[error("invalid workday template: {0}")]
    InvalidTemplate(String),

    #[error("batch failed validation with {} issue(s)", .0.len())]
    Validation(Vec<ValidationError>),
}
