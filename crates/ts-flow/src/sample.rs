//! Raw upstream payload types.

use ts_core::GeoPoint;

/// One flow probe from the external traffic API: speeds along a polyline.
///
/// `coordinates` needs at least 2 points to yield any segments; shorter
/// samples are tolerated and skipped by the processor.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowSample {
    /// Posted / uncongested speed, km/h.
    pub free_flow_kmh: f32,
    /// Currently observed speed, km/h.
    pub current_kmh: f32,
    /// Ordered polyline of the probed road stretch.
    pub coordinates: Vec<GeoPoint>,
}

/// One incident report from the external incidents API.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Incident {
    pub label: String,
    pub position: GeoPoint,
    /// Severity in percent, 0 = negligible, 100 = full blockage.
    pub severity_pct: f32,
    pub observed_unix_secs: i64,
}

/// A congestion hotspot carried through to the query API.
///
/// Zones are derived 1:1 from incidents on each refresh, never regenerated
/// by the scaler itself; on incident-fetch failure the previous zones are
/// retained (stale beats missing).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CongestionZone {
    pub label: String,
    pub position: GeoPoint,
    /// Congestion level in percent, clamped to [0, 100].
    pub level_pct: f32,
    pub observed_unix_secs: i64,
}

impl From<Incident> for CongestionZone {
    fn from(inc: Incident) -> Self {
        CongestionZone {
            label:              inc.label,
            position:           inc.position,
            level_pct:          inc.severity_pct.clamp(0.0, 100.0),
            observed_unix_secs: inc.observed_unix_secs,
        }
    }
}
