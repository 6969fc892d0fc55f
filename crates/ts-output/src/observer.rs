//! `ScalerOutputObserver<W>` — bridges `ScalerObserver` to an `OutputWriter`.

use std::time::Duration;

use ts_scaler::{ScalerObserver, Snapshot};

use crate::row::{RefreshSummaryRow, VehicleRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// Default cap on vehicle rows written per refresh.
///
/// A full million-vehicle dump per cycle would dominate disk traffic; the
/// population is generated deterministically from the seed anyway, so a
/// prefix sample is enough for offline inspection.
pub const DEFAULT_MAX_VEHICLE_ROWS: usize = 10_000;

/// A [`ScalerObserver`] that writes vehicle snapshots and refresh summaries
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `ScalerObserver`
/// methods have no return value.  After the refresh loop ends, check for
/// errors with [`take_error`][Self::take_error] and close the files with
/// [`finish`][Self::finish].
pub struct ScalerOutputObserver<W: OutputWriter> {
    writer:           W,
    max_vehicle_rows: usize,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> ScalerOutputObserver<W> {
    /// Create an observer backed by `writer` with the default row cap.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            max_vehicle_rows: DEFAULT_MAX_VEHICLE_ROWS,
            last_error:       None,
        }
    }

    /// Override the per-refresh vehicle row cap.
    pub fn with_max_vehicle_rows(mut self, cap: usize) -> Self {
        self.max_vehicle_rows = cap;
        self
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush and close the underlying writer.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files afterwards).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ScalerObserver for ScalerOutputObserver<W> {
    fn on_refresh_end(&mut self, snapshot: &Snapshot, elapsed: Duration) {
        let summary = RefreshSummaryRow {
            generated_unix_secs: snapshot.generated_unix_secs,
            elapsed_ms:          elapsed.as_millis() as u64,
            segments:            snapshot.segments.len() as u64,
            total_length_km:     snapshot.total_length_km,
            vehicles:            snapshot.vehicles.len() as u64,
            rsus:                snapshot.rsus.len() as u64,
            clusters:            snapshot.clusters.len() as u64,
            congestion_zones:    snapshot.zones.len() as u64,
        };
        let result = self.writer.write_refresh_summary(&summary);
        self.store_err(result);

        let rows: Vec<VehicleRow> = snapshot
            .vehicles
            .iter()
            .take(self.max_vehicle_rows)
            .map(|v| VehicleRow {
                vehicle_id:          v.id.0,
                generated_unix_secs: snapshot.generated_unix_secs,
                vehicle_type:        v.vehicle_type.as_str().to_owned(),
                trust_score:         v.trust_score,
                lat:                 v.pos.lat,
                lon:                 v.pos.lon,
                speed_kmh:           v.speed_kmh,
                heading_deg:         v.heading_deg,
                active:              v.active,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_vehicles(&rows);
            self.store_err(result);
        }
    }
}
