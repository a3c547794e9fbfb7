//! Report record data model
//!
//! One `ReportRecord` is an atomic unit of reported field activity on the
//! water network: which employee did what, to which asset, where, and when.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of physical asset a report refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Tank,
    Pipe,
    #[serde(rename = "Plumber-Equipment")]
    PlumberEquipment,
}

impl AssetType {
    pub const ALL: [AssetType; 3] = [AssetType::Tank, AssetType::Pipe, AssetType::PlumberEquipment];

    /// Returns the canonical label, as used in chip ids and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Tank => "Tank",
            AssetType::Pipe => "Pipe",
            AssetType::PlumberEquipment => "Plumber-Equipment",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownLabel::new("asset type", s))
    }
}

/// Kind of field activity the report documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Inspection,
    Maintenance,
    Repair,
    Reading,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Inspection,
        EventType::Maintenance,
        EventType::Repair,
        EventType::Reading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Inspection => "Inspection",
            EventType::Maintenance => "Maintenance",
            EventType::Repair => "Repair",
            EventType::Reading => "Reading",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownLabel::new("event type", s))
    }
}

/// Processing state of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    #[serde(rename = "OK")]
    Ok,
    Pending,
    InProgress,
    Closed,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Ok,
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Ok => "OK",
            ReportStatus::Pending => "Pending",
            ReportStatus::InProgress => "InProgress",
            ReportStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownLabel::new("status", s))
    }
}

/// Geographic zone of the municipal network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    North,
    South,
    East,
    West,
    Center,
}

impl Zone {
    pub const ALL: [Zone; 5] = [Zone::North, Zone::South, Zone::East, Zone::West, Zone::Center];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::North => "North",
            Zone::South => "South",
            Zone::East => "East",
            Zone::West => "West",
            Zone::Center => "Center",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Zone {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownLabel::new("zone", s))
    }
}

/// Error for parsing an enum label from user input (CLI, chip ids)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel {
    kind: &'static str,
    label: String,
}

impl UnknownLabel {
    pub(crate) fn new(kind: &'static str, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
        }
    }
}

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.label)
    }
}

impl std::error::Error for UnknownLabel {}

/// One observation of field activity.
///
/// Every field except `notes` is always present; there are no partial
/// records. `id` is stable identity only and carries no ordering meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: u32,
    pub date: NaiveDate,
    pub employee_id: u32,
    pub employee_name: String,
    pub employee_role: String,
    pub asset_id: u32,
    pub asset_type: AssetType,
    pub asset_name: String,
    pub event_type: EventType,
    pub duration_minutes: u32,
    pub status: ReportStatus,
    pub zone: Zone,
    pub notes: String,
}
