//! Zoom-adaptive viewport sampling.
//!
//! Three tiers, selected from the requested bounds and zoom level:
//!
//! | Zoom                   | Strategy                                | Cap |
//! |------------------------|-----------------------------------------|-----|
//! | none / `< cluster_zoom`| one marker per cluster, at its centroid | `overview_cap` |
//! | `cluster_zoom..raw_zoom`| per-cluster random samples, growing with zoom | `min(cluster_total_cap, 10^(zoom−6))` |
//! | `>= raw_zoom`          | raw per-vehicle bounds filter           | `raw_cap` |
//!
//! Mid-tier sampling is randomized per call.  The raw tier is a pure filter
//! in population order and therefore deterministic between refreshes.

use ts_core::{GeoBounds, GeoPoint, ScaleRng, ViewportConfig};
use ts_population::Vehicle;

use crate::snapshot::Snapshot;

/// One query result row: an owned vehicle copy plus its display position.
///
/// `cluster_size > 1` marks an overview-tier marker standing in for a whole
/// cluster (render it with a count badge); individual markers carry 1.
#[derive(Clone, Debug)]
pub struct VehicleMarker {
    pub vehicle: Vehicle,
    pub display_pos: GeoPoint,
    pub cluster_size: u64,
}

/// Answer a viewport query against `snap`.
///
/// Member indices in the cluster index always refer into `snap.vehicles`
/// (both are produced by the same pipeline run).
pub(crate) fn query(
    snap: &Snapshot,
    bounds: Option<&GeoBounds>,
    zoom: u8,
    vp: &ViewportConfig,
    rng: &mut ScaleRng,
) -> Vec<VehicleMarker> {
    match bounds {
        None => overview(snap, vp),
        Some(_) if zoom < vp.cluster_zoom => overview(snap, vp),
        Some(b) if zoom < vp.raw_zoom => cluster_tier(snap, b, zoom, vp, rng),
        Some(b) => raw_tier(snap, b, vp),
    }
}

/// One representative per cluster: its first stored member, repositioned to
/// the cluster centroid and tagged with the full member count.
fn overview(snap: &Snapshot, vp: &ViewportConfig) -> Vec<VehicleMarker> {
    let mut out = Vec::with_capacity(snap.clusters.len().min(vp.overview_cap));
    for cluster in snap.clusters.clusters() {
        if out.len() >= vp.overview_cap {
            break;
        }
        let Some(&first) = cluster.members.first() else {
            continue; // sample cap is always >= 1, so members is never empty
        };
        out.push(VehicleMarker {
            vehicle: snap.vehicles[first as usize].clone(),
            display_pos: cluster.centroid(),
            cluster_size: cluster.count,
        });
    }
    out
}

/// Proportional per-cluster samples from the visible clusters.
fn cluster_tier(
    snap: &Snapshot,
    bounds: &GeoBounds,
    zoom: u8,
    vp: &ViewportConfig,
    rng: &mut ScaleRng,
) -> Vec<VehicleMarker> {
    let per_cluster = per_cluster_samples(zoom, vp);
    let cap = cluster_tier_cap(zoom, vp);

    let mut out = Vec::new();
    'clusters: for cluster in snap.clusters.clusters_in(bounds) {
        // A cluster with fewer stored samples than requested contributes
        // everything it has.
        for pick in rng.sample_indices(cluster.members.len(), per_cluster) {
            if out.len() >= cap {
                break 'clusters;
            }
            let vehicle = snap.vehicles[cluster.members[pick] as usize].clone();
            let display_pos = vehicle.pos;
            out.push(VehicleMarker { vehicle, display_pos, cluster_size: 1 });
        }
    }
    out
}

/// Raw bounds filter in population order, deterministic between refreshes.
fn raw_tier(snap: &Snapshot, bounds: &GeoBounds, vp: &ViewportConfig) -> Vec<VehicleMarker> {
    snap.vehicles
        .iter()
        .filter(|v| bounds.contains(v.pos))
        .take(vp.raw_cap)
        .map(|v| VehicleMarker {
            vehicle: v.clone(),
            display_pos: v.pos,
            cluster_size: 1,
        })
        .collect()
}

/// Mid-tier per-cluster sample count: grows with zoom, floored at 1.
pub(crate) fn per_cluster_samples(zoom: u8, vp: &ViewportConfig) -> usize {
    ((zoom.saturating_sub(vp.cluster_zoom)) as usize * vp.per_zoom_cluster_samples).max(1)
}

/// Mid-tier total cap: `10^(zoom − 6)` clamped to the configured limit.
pub(crate) fn cluster_tier_cap(zoom: u8, vp: &ViewportConfig) -> usize {
    let exponent = u32::from(zoom.saturating_sub(6)).min(9);
    (10u64.pow(exponent) as usize).min(vp.cluster_total_cap)
}
