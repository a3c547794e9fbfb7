//! sig-reports - client-side report query engine for the SIG municipal
//! water network dashboard
//!
//! Filters, searches, sorts, and paginates an in-memory collection of
//! field-activity reports. The record collection comes from a pluggable
//! asynchronous source (a seeded mock until the reports endpoint exists);
//! everything downstream of the fetch is pure and deterministic.

pub mod cli;
pub mod engine;
pub mod observability;
pub mod report;
pub mod source;
