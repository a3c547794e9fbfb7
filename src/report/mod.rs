//! Report domain: records, filters, and the pure query stages
//!
//! Everything in this module is side-effect-free and deterministic. The
//! query pipeline applies, in order: date range, asset types, zones,
//! statuses, events, then free-text search; categories AND together and
//! values within a category OR together.

pub mod chips;
pub mod filters;
pub mod pagination;
pub mod record;
pub mod search;
pub mod sorter;

pub use chips::{ActiveFilter, ChipKind};
pub use filters::{DateRange, ReportFilters};
pub use record::{AssetType, EventType, ReportRecord, ReportStatus, UnknownLabel, Zone};
pub use sorter::{SortColumn, SortDirection};
