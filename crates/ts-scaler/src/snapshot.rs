//! One refresh cycle's cached state.

use std::time::{SystemTime, UNIX_EPOCH};

use ts_cluster::ClusterIndex;
use ts_flow::{CongestionZone, RoadSegment};
use ts_population::{RoadsideUnit, Vehicle};

/// Everything one pipeline run produced, swapped into the scaler
/// atomically.  Queries only ever see a complete snapshot — either the
/// previous one or the new one, never a mixture.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub segments: Vec<RoadSegment>,
    pub total_length_km: f64,
    pub vehicles: Vec<Vehicle>,
    pub rsus: Vec<RoadsideUnit>,
    pub zones: Vec<CongestionZone>,
    pub clusters: ClusterIndex,
    /// Unix seconds of the pipeline run that produced this snapshot;
    /// 0 for the empty pre-first-refresh snapshot.
    pub generated_unix_secs: i64,
}

impl Snapshot {
    /// The state before the first successful refresh: all queries answer
    /// empty, stats report no update time.
    pub fn empty() -> Snapshot {
        Snapshot::default()
    }

    pub fn is_populated(&self) -> bool {
        self.generated_unix_secs != 0
    }
}

/// Current wall-clock time as Unix seconds.
pub(crate) fn unix_now() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        // Pre-epoch clock: report 0 rather than panicking in a cache stamp.
        Err(_) => 0,
    }
}
