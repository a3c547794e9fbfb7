//! Record source seam
//!
//! The engine depends on exactly one external operation: an asynchronous
//! fetch that resolves to the full record collection or rejects.

use async_trait::async_trait;

use crate::report::ReportRecord;

use super::errors::SourceResult;

/// Asynchronous provider of the report record collection.
///
/// One call resolves once; there is no streaming, cancellation, or retry at
/// this seam. Retrying is the caller re-invoking `fetch`.
#[async_trait]
pub trait RecordSource {
    /// Fetches the full record collection
    async fn fetch(&self) -> SourceResult<Vec<ReportRecord>>;
}
