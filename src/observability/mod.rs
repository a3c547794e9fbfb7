//! Observability
//!
//! Structured logging only. The engine and CLI emit one JSON line per
//! event; there is no metrics or tracing layer in this crate.

mod logger;

pub use logger::{Logger, Severity};
