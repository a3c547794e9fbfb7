//! Mock record source
//!
//! Stands in for the dashboard backend until the reports endpoint exists.
//! Generation is seeded: the same seed always yields the same 120 records,
//! which keeps query results reproducible across runs and tests.

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::report::{AssetType, EventType, ReportRecord, ReportStatus, Zone};

use super::errors::{SourceError, SourceResult};
use super::provider::RecordSource;

/// Number of records the mock backend serves
pub const MOCK_RECORD_COUNT: usize = 120;

/// Field crew roster: (employee id, name, role)
const EMPLOYEES: [(u32, &str, &str); 8] = [
    (1, "Ana Pérez", "Inspector"),
    (2, "Carlos Gómez", "Plumber"),
    (3, "Lucía Fernández", "Technician"),
    (4, "Javier Morales", "Operator"),
    (5, "María Torres", "Plumber"),
    (6, "Diego Ramírez", "Inspector"),
    (7, "Sofía Herrera", "Technician"),
    (8, "Manuel Ortega", "Operator"),
];

/// Network assets: (asset id, type, name)
const ASSETS: [(u32, AssetType, &str); 9] = [
    (101, AssetType::Tank, "Cerro Alto Tank"),
    (102, AssetType::Tank, "Mirador Tank"),
    (103, AssetType::Tank, "La Loma Tank"),
    (201, AssetType::Pipe, "Main DN200 North"),
    (202, AssetType::Pipe, "Main DN150 South"),
    (203, AssetType::Pipe, "Feeder DN110 East"),
    (204, AssetType::Pipe, "Feeder DN90 West"),
    (301, AssetType::PlumberEquipment, "Pressure Gauge Kit"),
    (302, AssetType::PlumberEquipment, "Valve Wrench Set"),
];

const NOTES: [&str; 6] = [
    "",
    "Routine check, no anomalies",
    "Minor leak sealed on site",
    "Pressure reading above threshold, follow-up scheduled",
    "Replaced worn gasket",
    "Access hatch needs new lock",
];

/// Seeded generator standing in for the reports endpoint
#[derive(Debug, Clone)]
pub struct MockRecordSource {
    seed: u64,
}

impl MockRecordSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generates the full synthetic collection for this seed
    pub fn generate(&self) -> Vec<ReportRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid base date");

        (0..MOCK_RECORD_COUNT)
            .map(|i| {
                let (employee_id, employee_name, employee_role) =
                    EMPLOYEES[rng.gen_range(0..EMPLOYEES.len())];
                let (asset_id, asset_type, asset_name) = ASSETS[rng.gen_range(0..ASSETS.len())];
                let event_type = EventType::ALL[rng.gen_range(0..EventType::ALL.len())];
                let status = ReportStatus::ALL[rng.gen_range(0..ReportStatus::ALL.len())];
                let zone = Zone::ALL[rng.gen_range(0..Zone::ALL.len())];
                let date = base + Days::new(rng.gen_range(0..180));

                ReportRecord {
                    id: (i + 1) as u32,
                    date,
                    employee_id,
                    employee_name: employee_name.to_string(),
                    employee_role: employee_role.to_string(),
                    asset_id,
                    asset_type,
                    asset_name: asset_name.to_string(),
                    event_type,
                    duration_minutes: rng.gen_range(15..=240),
                    status,
                    zone,
                    notes: NOTES[rng.gen_range(0..NOTES.len())].to_string(),
                }
            })
            .collect()
    }
}

impl Default for MockRecordSource {
    fn default() -> Self {
        Self::new(42)
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn fetch(&self) -> SourceResult<Vec<ReportRecord>> {
        // One suspension point, like the real endpoint will have
        tokio::task::yield_now().await;
        Ok(self.generate())
    }
}

/// Source that always rejects, for exercising the load-failure path
#[derive(Debug, Clone)]
pub struct FailingRecordSource {
    reason: String,
}

impl FailingRecordSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl RecordSource for FailingRecordSource {
    async fn fetch(&self) -> SourceResult<Vec<ReportRecord>> {
        tokio::task::yield_now().await;
        Err(SourceError::Unavailable(self.reason.clone()))
    }
}
