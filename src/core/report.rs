// src/core/report.rs — Machine-readable summary of a campaign run

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::finalizer::WorkingPointOutcome;
use crate::core::types::{PassDescriptor, Region};

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub region: Region,
    pub date_tag: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub passes: Vec<PassDescriptor>,
    pub working_points: Vec<WorkingPointOutcome>,
}

impl RunReport {
    /// True when every working point reached its final file.
    pub fn all_copied(&self) -> bool {
        self.working_points.iter().all(|w| w.copied)
    }

    pub fn missing_cuts(&self) -> Vec<&str> {
        self.working_points
            .iter()
            .filter(|w| w.cuts.is_none())
            .map(|w| w.name.as_str())
            .collect()
    }

    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
