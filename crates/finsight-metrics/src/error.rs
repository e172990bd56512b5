//! Metric calculation error types.

use thiserror::Error;

/// Errors that can occur while computing a financial metric.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// One or more required columns are absent from the supplied table.
    /// Lists every missing name so the caller can correct them all at once.
    #[error("Missing columns in table: {0:?}")]
    MissingColumns(Vec<String>),
}

/// Result type for metric calculations.
pub type MetricsResult<T> = Result<T, MetricsError>;
