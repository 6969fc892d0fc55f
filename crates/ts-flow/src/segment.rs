//! Road-segment processor.
//!
//! Converts raw flow samples into directed [`RoadSegment`]s — one per
//! consecutive coordinate pair — and, when real sensor coverage is too
//! sparse, lays a uniform synthetic grid over the configured region.
//!
//! The synthetic pass is a **fill strategy, not a prediction**: sensor
//! coverage is sparse relative to the road network, so the grid stands in
//! for the unsensed majority with randomized speeds.  Real segments are
//! kept and synthetic ones appended.

use ts_core::{GeoBounds, GeoPoint, ScaleRng, SegmentId};

use crate::sample::FlowSample;

/// Segments shorter than this are degenerate (duplicate polyline points)
/// and skipped.
const MIN_SEGMENT_LENGTH_M: f32 = 1.0;

/// Synthetic free-flow speed range, km/h.
const SYNTHETIC_FREE_FLOW_KMH: std::ops::Range<f32> = 30.0..90.0;

/// Synthetic congestion range, percent.  Capped below 100 so synthetic
/// segments always carry moving traffic.
const SYNTHETIC_CONGESTION_PCT: std::ops::Range<f32> = 0.0..80.0;

// ── RoadSegment ───────────────────────────────────────────────────────────────

/// One directed road segment.  Immutable once created for a refresh cycle;
/// the whole set is regenerated wholesale on the next refresh.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadSegment {
    pub id: SegmentId,
    pub start: GeoPoint,
    pub end: GeoPoint,
    /// Great-circle length, kilometres.
    pub length_km: f32,
    pub free_flow_kmh: f32,
    pub current_kmh: f32,
    /// Derived congestion, clamped to [0, 100].
    pub congestion_pct: f32,
    /// Vehicles allocated to this segment; 0 until distribution runs.
    pub vehicle_count: u32,
}

/// Congestion as `100 * (1 - current/free_flow)`, clamped to [0, 100].
///
/// A non-positive free-flow speed means the probe carried no usable speed
/// data; treat as uncongested rather than dividing by zero.
pub fn congestion_pct(free_flow_kmh: f32, current_kmh: f32) -> f32 {
    if free_flow_kmh <= 0.0 {
        return 0.0;
    }
    (100.0 * (1.0 - current_kmh / free_flow_kmh)).clamp(0.0, 100.0)
}

// ── SegmentNetwork ────────────────────────────────────────────────────────────

/// The ordered segment set for one refresh cycle, plus its total length.
///
/// Total length is accumulated in `f64`: a million f32 additions of
/// kilometre-scale values would drift visibly.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentNetwork {
    pub segments: Vec<RoadSegment>,
    pub total_length_km: f64,
}

impl SegmentNetwork {
    /// Build a network from raw flow samples.
    ///
    /// Each consecutive coordinate pair becomes one directed segment.
    /// Samples with fewer than 2 points and degenerate (near-zero-length)
    /// pairs are skipped silently — the upstream API routinely returns
    /// partial payloads and one bad probe must not poison the cycle.
    pub fn from_samples(samples: &[FlowSample]) -> SegmentNetwork {
        let mut net = SegmentNetwork::default();
        for sample in samples {
            if sample.coordinates.len() < 2 {
                continue;
            }
            for pair in sample.coordinates.windows(2) {
                net.push_segment(pair[0], pair[1], sample.free_flow_kmh, sample.current_kmh);
            }
        }
        net
    }

    /// `true` when real coverage is below the configured minimum and the
    /// synthetic grid pass should run.
    #[inline]
    pub fn is_sparse(&self, min_segment_count: usize) -> bool {
        self.segments.len() < min_segment_count
    }

    /// Append a uniform `steps × steps` synthetic grid over `region`: one
    /// horizontal and one vertical segment per cell, with randomized
    /// free-flow speed and congestion.
    pub fn densify_synthetic(&mut self, region: &GeoBounds, steps: u32, rng: &mut ScaleRng) {
        let lat_step = region.height_deg() / steps as f32;
        let lon_step = region.width_deg() / steps as f32;

        for i in 0..steps {
            for j in 0..steps {
                let origin = GeoPoint::new(
                    region.min_lat + i as f32 * lat_step,
                    region.min_lon + j as f32 * lon_step,
                );
                let east  = GeoPoint::new(origin.lat, origin.lon + lon_step);
                let north = GeoPoint::new(origin.lat + lat_step, origin.lon);

                let (free, current) = synthetic_speeds(rng);
                self.push_segment(origin, east, free, current);

                let (free, current) = synthetic_speeds(rng);
                self.push_segment(origin, north, free, current);
            }
        }
    }

    fn push_segment(&mut self, start: GeoPoint, end: GeoPoint, free_flow_kmh: f32, current_kmh: f32) {
        let length_m = start.distance_m(end);
        if length_m < MIN_SEGMENT_LENGTH_M {
            return;
        }
        let length_km = length_m / 1_000.0;
        self.segments.push(RoadSegment {
            id: SegmentId(self.segments.len() as u32),
            start,
            end,
            length_km,
            free_flow_kmh,
            current_kmh,
            congestion_pct: congestion_pct(free_flow_kmh, current_kmh),
            vehicle_count: 0,
        });
        self.total_length_km += length_km as f64;
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

fn synthetic_speeds(rng: &mut ScaleRng) -> (f32, f32) {
    let free = rng.gen_range(SYNTHETIC_FREE_FLOW_KMH);
    let congestion = rng.gen_range(SYNTHETIC_CONGESTION_PCT);
    let current = free * (1.0 - congestion / 100.0);
    (free, current)
}
