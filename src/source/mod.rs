//! Record sources
//!
//! The asynchronous boundary between the query engine and whatever serves
//! the record collection. Today that is a seeded mock generator; a real
//! reports endpoint plugs in behind the same trait.

mod errors;
mod mock;
mod provider;

pub use errors::{SourceError, SourceResult};
pub use mock::{FailingRecordSource, MockRecordSource, MOCK_RECORD_COUNT};
pub use provider::RecordSource;
