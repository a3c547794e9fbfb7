//! Active-filter chips
//!
//! A chip is the display projection of one atomic filter selection. Chips
//! have no lifecycle of their own: they are recomputed from `ReportFilters`
//! and the record set, and their ids are the handle `remove` uses to clear
//! exactly one selection.
//!
//! Chip id convention (fixed, shared with the dashboard front-end):
//! `employee-<id>`, `assetType-<type>`, `asset-<id>`, `zone-<zone>`,
//! `status-<status>`, `event-<event>`, and the literal `dateRange`.

use serde::Serialize;

use super::filters::ReportFilters;
use super::record::ReportRecord;

/// Category a chip belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChipKind {
    DateRange,
    Employee,
    AssetType,
    Asset,
    Zone,
    Status,
    Event,
}

/// One atomic filter selection, flattened for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilter {
    pub id: String,
    pub kind: ChipKind,
    pub label: String,
    pub value: String,
}

/// Flattens the current filters into one chip per atomic selection.
///
/// Employee and asset chips resolve their display value from the record
/// set; an id that appears in no record falls back to `#<id>`.
pub fn collect(filters: &ReportFilters, records: &[ReportRecord]) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    if let Some(range) = &filters.date_range {
        chips.push(ActiveFilter {
            id: "dateRange".to_string(),
            kind: ChipKind::DateRange,
            label: "Date range".to_string(),
            value: format!("{} to {}", range.start, range.end),
        });
    }

    if let Some(ids) = &filters.employee_ids {
        for id in ids {
            let name = records
                .iter()
                .find(|r| r.employee_id == *id)
                .map(|r| r.employee_name.clone())
                .unwrap_or_else(|| format!("#{id}"));
            chips.push(ActiveFilter {
                id: format!("employee-{id}"),
                kind: ChipKind::Employee,
                label: "Employee".to_string(),
                value: name,
            });
        }
    }

    if let Some(types) = &filters.asset_types {
        for ty in types {
            chips.push(ActiveFilter {
                id: format!("assetType-{}", ty.as_str()),
                kind: ChipKind::AssetType,
                label: "Asset type".to_string(),
                value: ty.as_str().to_string(),
            });
        }
    }

    if let Some(ids) = &filters.asset_ids {
        for id in ids {
            let name = records
                .iter()
                .find(|r| r.asset_id == *id)
                .map(|r| r.asset_name.clone())
                .unwrap_or_else(|| format!("#{id}"));
            chips.push(ActiveFilter {
                id: format!("asset-{id}"),
                kind: ChipKind::Asset,
                label: "Asset".to_string(),
                value: name,
            });
        }
    }

    if let Some(zones) = &filters.zones {
        for zone in zones {
            chips.push(ActiveFilter {
                id: format!("zone-{}", zone.as_str()),
                kind: ChipKind::Zone,
                label: "Zone".to_string(),
                value: zone.as_str().to_string(),
            });
        }
    }

    if let Some(statuses) = &filters.statuses {
        for status in statuses {
            chips.push(ActiveFilter {
                id: format!("status-{}", status.as_str()),
                kind: ChipKind::Status,
                label: "Status".to_string(),
                value: status.as_str().to_string(),
            });
        }
    }

    if let Some(events) = &filters.events {
        for event in events {
            chips.push(ActiveFilter {
                id: format!("event-{}", event.as_str()),
                kind: ChipKind::Event,
                label: "Event".to_string(),
                value: event.as_str().to_string(),
            });
        }
    }

    chips
}

/// Removes exactly the one atomic selection a chip id encodes.
///
/// Unknown or malformed ids are a no-op: the caller holds a chip list that
/// was derived from these same filters, so a miss means the chip is stale.
pub fn remove(filters: &mut ReportFilters, chip_id: &str) {
    if chip_id == "dateRange" {
        filters.date_range = None;
        return;
    }
    let Some((prefix, rest)) = chip_id.split_once('-') else {
        return;
    };
    match prefix {
        "employee" => {
            if let (Some(ids), Ok(id)) = (filters.employee_ids.as_mut(), rest.parse::<u32>()) {
                ids.retain(|v| *v != id);
            }
        }
        "assetType" => {
            if let (Some(types), Ok(ty)) = (filters.asset_types.as_mut(), rest.parse()) {
                types.retain(|v| *v != ty);
            }
        }
        "asset" => {
            if let (Some(ids), Ok(id)) = (filters.asset_ids.as_mut(), rest.parse::<u32>()) {
                ids.retain(|v| *v != id);
            }
        }
        "zone" => {
            if let (Some(zones), Ok(zone)) = (filters.zones.as_mut(), rest.parse()) {
                zones.retain(|v| *v != zone);
            }
        }
        "status" => {
            if let (Some(statuses), Ok(status)) = (filters.statuses.as_mut(), rest.parse()) {
                statuses.retain(|v| *v != status);
            }
        }
        "event" => {
            if let (Some(events), Ok(event)) = (filters.events.as_mut(), rest.parse()) {
                events.retain(|v| *v != event);
            }
        }
        _ => {}
    }
}
