//! CLI errors

use thiserror::Error;

use crate::report::UnknownLabel;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Date flag not in YYYY-MM-DD form
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Only one end of the date range was given
    #[error("Date range needs both --from and --to")]
    IncompleteDateRange,

    /// Range with end before start
    #[error("Date range end {end} is before start {start}")]
    InvertedDateRange { start: String, end: String },

    /// Unknown zone/status/event/asset-type/sort-column label
    #[error("{0}")]
    UnknownLabel(#[from] UnknownLabel),

    /// The record source rejected the fetch
    #[error("Could not load reports: {0}")]
    LoadFailed(String),

    /// Output serialization failed
    #[error("Could not serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}
