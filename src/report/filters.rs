//! Filter state and predicate evaluation for report queries
//!
//! Filter categories combine with AND; membership within one category's
//! value set is OR. An absent category imposes no constraint, and an empty
//! set behaves exactly like an absent one ("cleared"), never "match nothing".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{AssetType, EventType, ReportRecord, ReportStatus, Zone};

/// Inclusive calendar bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Inclusive on both bounds
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Optional, independently-toggleable predicates over the record collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilters {
    pub date_range: Option<DateRange>,
    pub employee_ids: Option<Vec<u32>>,
    pub asset_types: Option<Vec<AssetType>>,
    pub asset_ids: Option<Vec<u32>>,
    pub zones: Option<Vec<Zone>>,
    pub statuses: Option<Vec<ReportStatus>>,
    pub events: Option<Vec<EventType>>,
}

/// Membership test with cleared-set semantics: `None` and an empty set both
/// allow everything.
fn set_allows<T: PartialEq>(set: &Option<Vec<T>>, value: &T) -> bool {
    match set {
        Some(values) if !values.is_empty() => values.contains(value),
        _ => true,
    }
}

impl ReportFilters {
    /// Checks a record against the applied categories, in order:
    /// date range, asset types, zones, statuses, events.
    ///
    /// Employee and asset selections are chip state only and do not
    /// constrain the record set.
    pub fn matches(&self, record: &ReportRecord) -> bool {
        if let Some(range) = &self.date_range {
            if !range.contains(record.date) {
                return false;
            }
        }
        set_allows(&self.asset_types, &record.asset_type)
            && set_allows(&self.zones, &record.zone)
            && set_allows(&self.statuses, &record.status)
            && set_allows(&self.events, &record.event_type)
    }

    /// True when no category holds a selection
    pub fn is_empty(&self) -> bool {
        fn cleared<T>(set: &Option<Vec<T>>) -> bool {
            set.as_ref().map_or(true, |v| v.is_empty())
        }
        self.date_range.is_none()
            && cleared(&self.employee_ids)
            && cleared(&self.asset_ids)
            && cleared(&self.asset_types)
            && cleared(&self.zones)
            && cleared(&self.statuses)
            && cleared(&self.events)
    }
}
