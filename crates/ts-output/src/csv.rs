//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_snapshots.csv`
//! - `refresh_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RefreshSummaryRow, VehicleRow};

/// Writes scaler output to two CSV files.
pub struct CsvWriter {
    vehicles:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut vehicles = Writer::from_path(dir.join("vehicle_snapshots.csv"))?;
        vehicles.write_record([
            "vehicle_id",
            "generated_unix_secs",
            "vehicle_type",
            "trust_score",
            "lat",
            "lon",
            "speed_kmh",
            "heading_deg",
            "active",
        ])?;

        let mut summaries = Writer::from_path(dir.join("refresh_summaries.csv"))?;
        summaries.write_record([
            "generated_unix_secs",
            "elapsed_ms",
            "segments",
            "total_length_km",
            "vehicles",
            "rsus",
            "clusters",
            "congestion_zones",
        ])?;

        Ok(Self {
            vehicles,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_vehicles(&mut self, rows: &[VehicleRow]) -> OutputResult<()> {
        for row in rows {
            self.vehicles.write_record(&[
                row.vehicle_id.to_string(),
                row.generated_unix_secs.to_string(),
                row.vehicle_type.clone(),
                row.trust_score.to_string(),
                row.lat.to_string(),
                row.lon.to_string(),
                row.speed_kmh.to_string(),
                row.heading_deg.to_string(),
                (row.active as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_refresh_summary(&mut self, row: &RefreshSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.generated_unix_secs.to_string(),
            row.elapsed_ms.to_string(),
            row.segments.to_string(),
            row.total_length_km.to_string(),
            row.vehicles.to_string(),
            row.rsus.to_string(),
            row.clusters.to_string(),
            row.congestion_zones.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.vehicles.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
