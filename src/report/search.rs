//! Free-text search over report records
//!
//! Case-insensitive substring match against employee name, asset name,
//! notes, and the zone label. A record matches if ANY of those fields
//! contains the query.

use super::record::ReportRecord;

/// Checks a record against a free-text query.
///
/// An empty query matches every record. Case folding is Unicode-aware, so
/// "PÉREZ" finds "pérez".
pub fn matches(record: &ReportRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.employee_name.to_lowercase().contains(&needle)
        || record.asset_name.to_lowercase().contains(&needle)
        || record.notes.to_lowercase().contains(&needle)
        || record.zone.as_str().to_lowercase().contains(&needle)
}
