//! Record source errors
//!
//! Fetching the record collection is the engine's only fallible step. A
//! rejection is soft: the engine stores the message and serves an empty
//! view until a retry succeeds.

use thiserror::Error;

/// Result type for record source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Record source errors
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The backing service rejected or could not serve the fetch
    #[error("Record source unavailable: {0}")]
    Unavailable(String),
}
