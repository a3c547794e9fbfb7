//! Column sorting for report queries
//!
//! Sorts on the raw field value using its natural ordering: numeric for
//! numbers, lexicographic for strings, chronological for dates. The sort is
//! stable, so equal keys keep their incoming order. Descending is the exact
//! reverse of ascending.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::{ReportRecord, UnknownLabel};

/// Sortable columns of a report record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    Id,
    Date,
    EmployeeName,
    EmployeeRole,
    AssetType,
    AssetName,
    EventType,
    DurationMinutes,
    Status,
    Zone,
}

impl SortColumn {
    pub const ALL: [SortColumn; 10] = [
        SortColumn::Id,
        SortColumn::Date,
        SortColumn::EmployeeName,
        SortColumn::EmployeeRole,
        SortColumn::AssetType,
        SortColumn::AssetName,
        SortColumn::EventType,
        SortColumn::DurationMinutes,
        SortColumn::Status,
        SortColumn::Zone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Date => "date",
            SortColumn::EmployeeName => "employee_name",
            SortColumn::EmployeeRole => "employee_role",
            SortColumn::AssetType => "asset_type",
            SortColumn::AssetName => "asset_name",
            SortColumn::EventType => "event_type",
            SortColumn::DurationMinutes => "duration_minutes",
            SortColumn::Status => "status",
            SortColumn::Zone => "zone",
        }
    }

    /// Compares two records on this column, ascending
    fn compare(&self, a: &ReportRecord, b: &ReportRecord) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Date => a.date.cmp(&b.date),
            SortColumn::EmployeeName => a.employee_name.cmp(&b.employee_name),
            SortColumn::EmployeeRole => a.employee_role.cmp(&b.employee_role),
            SortColumn::AssetType => a.asset_type.as_str().cmp(b.asset_type.as_str()),
            SortColumn::AssetName => a.asset_name.cmp(&b.asset_name),
            SortColumn::EventType => a.event_type.as_str().cmp(b.event_type.as_str()),
            SortColumn::DurationMinutes => a.duration_minutes.cmp(&b.duration_minutes),
            SortColumn::Status => a.status.as_str().cmp(b.status.as_str()),
            SortColumn::Zone => a.zone.as_str().cmp(b.zone.as_str()),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownLabel::new("sort column", s))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sorts a view of records by one column.
///
/// Stable: records with equal keys keep the order they came in with.
pub fn sort(records: &mut [&ReportRecord], column: SortColumn, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = column.compare(a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::record::{AssetType, EventType, ReportStatus, Zone};
    use chrono::NaiveDate;

    fn make_record(id: u32, duration: u32, name: &str) -> ReportRecord {
        ReportRecord {
            id,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(id as u64),
            employee_id: id,
            employee_name: name.to_string(),
            employee_role: "Technician".to_string(),
            asset_id: id,
            asset_type: AssetType::Tank,
            asset_name: format!("Tank T-{id}"),
            event_type: EventType::Reading,
            duration_minutes: duration,
            status: ReportStatus::Ok,
            zone: Zone::North,
            notes: String::new(),
        }
    }

    #[test]
    fn test_sort_numeric_ascending() {
        let records = vec![
            make_record(1, 90, "c"),
            make_record(2, 30, "a"),
            make_record(3, 60, "b"),
        ];
        let mut view: Vec<&ReportRecord> = records.iter().collect();
        sort(&mut view, SortColumn::DurationMinutes, SortDirection::Asc);
        let durations: Vec<u32> = view.iter().map(|r| r.duration_minutes).collect();
        assert_eq!(durations, vec![30, 60, 90]);
    }

    #[test]
    fn test_desc_is_reverse_of_asc() {
        let records = vec![
            make_record(1, 90, "c"),
            make_record(2, 30, "a"),
            make_record(3, 60, "b"),
        ];
        let mut asc: Vec<&ReportRecord> = records.iter().collect();
        let mut desc: Vec<&ReportRecord> = records.iter().collect();
        sort(&mut asc, SortColumn::EmployeeName, SortDirection::Asc);
        sort(&mut desc, SortColumn::EmployeeName, SortDirection::Desc);
        asc.reverse();
        let asc_ids: Vec<u32> = asc.iter().map(|r| r.id).collect();
        let desc_ids: Vec<u32> = desc.iter().map(|r| r.id).collect();
        assert_eq!(asc_ids, desc_ids);
    }

    #[test]
    fn test_sort_stable_on_equal_keys() {
        let records = vec![
            make_record(1, 45, "a"),
            make_record(2, 45, "b"),
            make_record(3, 45, "c"),
        ];
        let mut view: Vec<&ReportRecord> = records.iter().collect();
        sort(&mut view, SortColumn::DurationMinutes, SortDirection::Asc);
        let ids: Vec<u32> = view.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_chronological() {
        let records = vec![
            make_record(5, 10, "a"),
            make_record(1, 10, "b"),
            make_record(3, 10, "c"),
        ];
        let mut view: Vec<&ReportRecord> = records.iter().collect();
        sort(&mut view, SortColumn::Date, SortDirection::Desc);
        let ids: Vec<u32> = view.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 3, 1]);
    }

    #[test]
    fn test_column_labels_round_trip() {
        for c in SortColumn::ALL {
            assert_eq!(c.as_str().parse::<SortColumn>().unwrap(), c);
        }
        assert!("depth".parse::<SortColumn>().is_err());
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }
}
