//! Roadside-unit placement.
//!
//! Strategic (named) locations go first, then synthetic candidates fill the
//! configured count.  Every placement must clear the minimum pairwise
//! separation; violating candidates are re-drawn a bounded number of times
//! and the slot is abandoned when the region saturates.  Placement degrades,
//! it never errors.
//!
//! Separation is checked against an R-tree of already-placed units: one
//! nearest-neighbor probe per candidate instead of a linear scan.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use ts_core::{GeoBounds, GeoPoint, RsuConfig, RsuId, ScaleRng};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// A placed unit's position in the separation index.
#[derive(Clone)]
struct PlacedEntry {
    point: [f32; 2], // [lat, lon]
}

impl RTreeObject for PlacedEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PlacedEntry {
    /// Squared Euclidean distance in lat/lon space — only used to pick the
    /// nearest candidate; the actual separation test uses haversine metres.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RoadsideUnit ──────────────────────────────────────────────────────────────

/// One roadside unit (V2X base station).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadsideUnit {
    pub id: RsuId,
    pub label: String,
    pub pos: GeoPoint,
    pub active: bool,
    /// Radio coverage radius, metres.
    pub coverage_radius_m: f32,
}

/// Probability that a placed unit reports as active.
const ACTIVE_PROBABILITY: f64 = 0.95;

/// Place up to `cfg.target_count` units inside `region`.
///
/// Returns fewer than the target when the separation constraint can no
/// longer be satisfied (tiny region or large separation distance).
pub fn place_rsus(cfg: &RsuConfig, region: &GeoBounds, rng: &mut ScaleRng) -> Vec<RoadsideUnit> {
    let mut tree: RTree<PlacedEntry> = RTree::new();
    let mut out: Vec<RoadsideUnit> = Vec::with_capacity(cfg.target_count);

    // Strategic locations first.  Violators (of the separation rule or the
    // region) are skipped rather than relocated — a named junction moved
    // elsewhere would be a lie on the map.
    for (label, pos) in &cfg.strategic {
        if out.len() >= cfg.target_count {
            break;
        }
        if region.contains(*pos) && well_separated(&tree, *pos, cfg.min_separation_m) {
            push_unit(&mut out, &mut tree, label.clone(), *pos, cfg, rng);
        }
    }

    // Synthetic fill.
    while out.len() < cfg.target_count {
        let mut placed = false;
        for _ in 0..cfg.max_placement_attempts {
            let candidate = region.random_point(rng);
            if well_separated(&tree, candidate, cfg.min_separation_m) {
                let label = format!("RSU-{:03}", out.len());
                push_unit(&mut out, &mut tree, label, candidate, cfg, rng);
                placed = true;
                break;
            }
        }
        if !placed {
            // Region saturated: return what we have.
            break;
        }
    }

    out
}

fn well_separated(tree: &RTree<PlacedEntry>, pos: GeoPoint, min_separation_m: f32) -> bool {
    match tree.nearest_neighbor(&[pos.lat, pos.lon]) {
        None => true,
        Some(e) => GeoPoint::new(e.point[0], e.point[1]).distance_m(pos) >= min_separation_m,
    }
}

fn push_unit(
    out: &mut Vec<RoadsideUnit>,
    tree: &mut RTree<PlacedEntry>,
    label: String,
    pos: GeoPoint,
    cfg: &RsuConfig,
    rng: &mut ScaleRng,
) {
    let (lo, hi) = cfg.coverage_radius_m;
    out.push(RoadsideUnit {
        id: RsuId(out.len() as u32),
        label,
        pos,
        active: rng.gen_bool(ACTIVE_PROBABILITY),
        coverage_radius_m: rng.gen_range(lo..=hi),
    });
    tree.insert(PlacedEntry { point: [pos.lat, pos.lon] });
}
