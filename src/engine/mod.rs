//! Report query engine
//!
//! Per-view state holder over the record collection. The engine owns the
//! query state (filters, search, sort, pagination), exposes one named
//! operation per mutation, and derives the visible page on demand.

mod engine;

pub use engine::{EngineConfig, LoadState, ReportQueryEngine};
