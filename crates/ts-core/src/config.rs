//! Scaler configuration.
//!
//! One plain struct, built by the application and handed to the scaler at
//! construction; nothing here is runtime-mutable.  `Default` encodes the
//! constants the system shipped with.  The viewport tier constants in
//! [`ViewportConfig`] are empirically chosen performance knobs, not
//! correctness-critical business logic — tune freely.

use std::time::Duration;

use crate::error::{ScaleError, ScaleResult};
use crate::geo::{GeoBounds, GeoPoint};
use crate::vehicle::VehicleType;

// ── VehicleTypeSpec ───────────────────────────────────────────────────────────

/// One entry of the categorical vehicle-type distribution.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleTypeSpec {
    pub vehicle_type: VehicleType,
    /// Relative weight; weights need not sum to 1.
    pub weight: f32,
    /// Inclusive trust-score range assigned to this type.
    pub trust_range: (u8, u8),
}

impl VehicleTypeSpec {
    pub fn new(vehicle_type: VehicleType, weight: f32, trust_range: (u8, u8)) -> Self {
        Self { vehicle_type, weight, trust_range }
    }
}

// ── RsuConfig ─────────────────────────────────────────────────────────────────

/// Roadside-unit placement parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RsuConfig {
    /// Total units to place (strategic + synthetic).
    pub target_count: usize,

    /// Minimum pairwise separation between placed units, metres.
    pub min_separation_m: f32,

    /// Coverage radius drawn uniformly from this range, metres.
    pub coverage_radius_m: (f32, f32),

    /// How many candidate positions to try per synthetic slot before the
    /// slot is abandoned (placement degrades, never errors).
    pub max_placement_attempts: usize,

    /// Named locations placed first (major junctions, transit hubs).
    pub strategic: Vec<(String, GeoPoint)>,
}

impl Default for RsuConfig {
    fn default() -> Self {
        Self {
            target_count:           120,
            min_separation_m:       500.0,
            coverage_radius_m:      (300.0, 1_000.0),
            max_placement_attempts: 12,
            strategic: vec![
                ("Connaught Place".into(),      GeoPoint::new(28.6315, 77.2167)),
                ("IGI Airport T3".into(),       GeoPoint::new(28.5562, 77.1000)),
                ("Kashmere Gate ISBT".into(),   GeoPoint::new(28.6675, 77.2285)),
                ("Noida Sector 18".into(),      GeoPoint::new(28.5708, 77.3260)),
                ("Cyber City Gurugram".into(),  GeoPoint::new(28.4950, 77.0890)),
                ("AIIMS Crossing".into(),       GeoPoint::new(28.5672, 77.2100)),
            ],
        }
    }
}

// ── ViewportConfig ────────────────────────────────────────────────────────────

/// Zoom-adaptive sampling tiers for the viewport query layer.
///
/// Tier boundaries and cap formulas are tuning knobs inherited from the
/// shipped defaults; they trade rendering cost against fidelity and carry no
/// derivation beyond "looked right on a map".
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportConfig {
    /// Below this zoom (or with no bounds at all): one marker per cluster.
    pub cluster_zoom: u8,

    /// At or above this zoom: raw per-vehicle bounds filtering.
    pub raw_zoom: u8,

    /// Result cap for the overview (cluster-centroid) tier.
    pub overview_cap: usize,

    /// Per-cluster sample size grows by this much per zoom level above
    /// `cluster_zoom` (floored at 1).
    pub per_zoom_cluster_samples: usize,

    /// Upper limit on the mid-tier total cap (`10^(zoom - 6)` is clamped to
    /// this).
    pub cluster_total_cap: usize,

    /// Hard result cap for the raw tier.
    pub raw_cap: usize,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            cluster_zoom:             8,
            raw_zoom:                 13,
            overview_cap:             5_000,
            per_zoom_cluster_samples: 50,
            cluster_total_cap:        50_000,
            raw_cap:                  100_000,
        }
    }
}

// ── ScalerConfig ──────────────────────────────────────────────────────────────

/// Top-level configuration for one scaler instance.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalerConfig {
    /// Bounding region covered by synthetic densification, RSU placement,
    /// and the demo providers.
    pub region: GeoBounds,

    /// Total synthetic vehicles to distribute across the segment network.
    /// Per-segment allocation is proportional to length share.
    pub target_vehicle_count: u32,

    /// Below this many real segments, the synthetic grid pass kicks in.
    pub min_segment_count: usize,

    /// Steps per axis of the synthetic segment grid (steps × steps cells,
    /// two segments per cell).
    pub synthetic_grid_steps: u32,

    /// Cluster cell edge length in degrees.
    pub grid_size_deg: f32,

    /// Hard cap on stored member samples per cluster.  Clusters beyond the
    /// cap lose individual-vehicle fidelity and only contribute centroid
    /// and count — a deliberate precision/memory trade-off.
    pub cluster_sample_cap: usize,

    /// A refresh younger than this is coalesced into a no-op.
    pub cache_timeout: Duration,

    /// Master RNG seed.  The same seed always produces the same population.
    pub seed: u64,

    /// Categorical vehicle-type distribution with per-type trust ranges.
    pub vehicle_mix: Vec<VehicleTypeSpec>,

    pub rsu: RsuConfig,

    pub viewport: ViewportConfig,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            // Delhi NCR — the deployment the shipped constants were tuned on.
            region:               GeoBounds::new(28.40, 76.85, 28.90, 77.35),
            target_vehicle_count: 1_000_000,
            min_segment_count:    100,
            synthetic_grid_steps: 30,
            grid_size_deg:        0.01,
            cluster_sample_cap:   1_000,
            cache_timeout:        Duration::from_secs(60),
            seed:                 42,
            vehicle_mix: vec![
                VehicleTypeSpec::new(VehicleType::Car,        0.55, (60, 100)),
                VehicleTypeSpec::new(VehicleType::Motorcycle, 0.20, (50, 95)),
                VehicleTypeSpec::new(VehicleType::Truck,      0.12, (55, 95)),
                VehicleTypeSpec::new(VehicleType::Bus,        0.08, (70, 100)),
                VehicleTypeSpec::new(VehicleType::Emergency,  0.05, (85, 100)),
            ],
            rsu:      RsuConfig::default(),
            viewport: ViewportConfig::default(),
        }
    }
}

impl ScalerConfig {
    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> ScaleResult<()> {
        if self.region.width_deg() <= 0.0 || self.region.height_deg() <= 0.0 {
            return Err(ScaleError::Config("region must have positive extent".into()));
        }
        if self.grid_size_deg <= 0.0 {
            return Err(ScaleError::Config("grid_size_deg must be positive".into()));
        }
        if self.cluster_sample_cap == 0 {
            return Err(ScaleError::Config("cluster_sample_cap must be at least 1".into()));
        }
        if self.synthetic_grid_steps == 0 {
            return Err(ScaleError::Config("synthetic_grid_steps must be at least 1".into()));
        }
        if self.vehicle_mix.is_empty() {
            return Err(ScaleError::Config("vehicle_mix must not be empty".into()));
        }
        let total_weight: f32 = self.vehicle_mix.iter().map(|s| s.weight).sum();
        if !(total_weight > 0.0) {
            return Err(ScaleError::Config("vehicle_mix weights must sum to a positive value".into()));
        }
        for spec in &self.vehicle_mix {
            if spec.trust_range.0 > spec.trust_range.1 {
                return Err(ScaleError::Config(format!(
                    "trust range inverted for {}",
                    spec.vehicle_type
                )));
            }
        }
        if self.viewport.raw_zoom <= self.viewport.cluster_zoom {
            return Err(ScaleError::Config("raw_zoom must exceed cluster_zoom".into()));
        }
        if self.rsu.coverage_radius_m.0 > self.rsu.coverage_radius_m.1 {
            return Err(ScaleError::Config("RSU coverage radius range inverted".into()));
        }
        Ok(())
    }
}
