use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::record::{LaunchRecord, Outcome, PayloadRange};
use crate::error::{DashResult, DashboardError};

/// Row shape of the launch CSV. Extra columns in the file are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

/// Immutable launch-record table plus the per-load derived views the UI
/// needs: distinct sites in first-appearance order and observed payload
/// bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: PayloadRange,
}

impl Dataset {
    /// Builds a dataset from already-typed records. Fails on an empty input
    /// since payload bounds would be undefined.
    pub fn from_records(records: Vec<LaunchRecord>) -> DashResult<Self> {
        if records.is_empty() {
            return Err(DashboardError::EmptyDataset);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        for record in &records {
            if !sites.iter().any(|site| site == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
        }

        debug!(
            record_count = records.len(),
            site_count = sites.len(),
            min_payload,
            max_payload,
            "dataset loaded"
        );

        Ok(Self {
            records,
            sites,
            payload_bounds: PayloadRange::new(min_payload, max_payload),
        })
    }

    /// Reads the launch CSV from `reader`. Any missing required column,
    /// unparseable field, or out-of-domain `class` value is fatal.
    pub fn from_csv_reader<R: Read>(reader: R) -> DashResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
            let row = row.map_err(|e| {
                DashboardError::MalformedDataset(format!("row {}: {e}", index + 1))
            })?;
            let outcome = Outcome::from_class(row.class).ok_or_else(|| {
                DashboardError::MalformedDataset(format!(
                    "row {}: class must be 0 or 1, got {}",
                    index + 1,
                    row.class
                ))
            })?;
            records.push(LaunchRecord {
                launch_site: row.launch_site,
                payload_mass_kg: row.payload_mass_kg,
                outcome,
                booster_category: row.booster_category,
            });
        }

        Self::from_records(records)
    }

    /// Reads the launch CSV at `path`.
    pub fn from_csv_path(path: impl AsRef<Path>) -> DashResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DashboardError::DatasetOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(file)
    }

    #[must_use]
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in first-appearance order.
    #[must_use]
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Observed `[min, max]` payload mass, the slider's initial value.
    #[must_use]
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }
}
