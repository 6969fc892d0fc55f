//! The cluster index: cell map, incremental centroids, bounded samples.

use rustc_hash::FxHashMap;

use ts_core::{GeoBounds, GeoPoint};

use crate::cell::CellKey;

// ── VehicleCluster ────────────────────────────────────────────────────────────

/// One occupied grid cell.
///
/// The centroid is the true mean of **all** members ever assigned — the
/// running-mean update uses the full count, so it stays exact even after
/// the member sample stops growing at the cap.
#[derive(Clone, Debug)]
pub struct VehicleCluster {
    pub key: CellKey,
    /// Total vehicles assigned to this cell.
    pub count: u64,
    /// Running mean, f64: a million f32 increments would drift.
    avg_lat: f64,
    avg_lon: f64,
    /// Bounded sample of member indices into the caller's population vec.
    pub members: Vec<u32>,
}

impl VehicleCluster {
    fn new(key: CellKey) -> Self {
        VehicleCluster { key, count: 0, avg_lat: 0.0, avg_lon: 0.0, members: Vec::new() }
    }

    /// Fold one member into the running mean; retain its index while the
    /// sample is below `cap`.
    fn observe(&mut self, index: u32, pos: GeoPoint, cap: usize) {
        let n = self.count as f64;
        self.avg_lat = (self.avg_lat * n + pos.lat as f64) / (n + 1.0);
        self.avg_lon = (self.avg_lon * n + pos.lon as f64) / (n + 1.0);
        self.count += 1;
        if self.members.len() < cap {
            self.members.push(index);
        }
    }

    /// Mean position of all assigned members.
    #[inline]
    pub fn centroid(&self) -> GeoPoint {
        GeoPoint::new(self.avg_lat as f32, self.avg_lon as f32)
    }
}

// ── ClusterIndex ──────────────────────────────────────────────────────────────

/// Grid-cell index over one refresh cycle's population.
///
/// Built once per refresh and immutable afterwards; vehicles are never
/// re-assigned because the population itself is replaced wholesale on the
/// next refresh.
#[derive(Clone, Debug, Default)]
pub struct ClusterIndex {
    grid_size_deg: f32,
    cells: FxHashMap<CellKey, VehicleCluster>,
}

impl ClusterIndex {
    /// Cluster `positions` into cells of edge length `grid_size_deg`,
    /// retaining at most `sample_cap` member indices per cell.
    ///
    /// One pass, O(n); no sorting.
    pub fn build(
        positions: impl IntoIterator<Item = GeoPoint>,
        grid_size_deg: f32,
        sample_cap: usize,
    ) -> ClusterIndex {
        let mut cells: FxHashMap<CellKey, VehicleCluster> = FxHashMap::default();
        for (i, pos) in positions.into_iter().enumerate() {
            let key = CellKey::of(pos, grid_size_deg);
            cells
                .entry(key)
                .or_insert_with(|| VehicleCluster::new(key))
                .observe(i as u32, pos, sample_cap);
        }
        ClusterIndex { grid_size_deg, cells }
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn grid_size_deg(&self) -> f32 {
        self.grid_size_deg
    }

    /// Sum of all per-cell counts — always equals the clustered population
    /// size.
    pub fn total_count(&self) -> u64 {
        self.cells.values().map(|c| c.count).sum()
    }

    pub fn get(&self, key: CellKey) -> Option<&VehicleCluster> {
        self.cells.get(&key)
    }

    /// Iterate over all clusters (map order: stable for a given build, not
    /// geographically meaningful).
    pub fn clusters(&self) -> impl Iterator<Item = &VehicleCluster> {
        self.cells.values()
    }

    /// Clusters whose **centroid** falls inside `bounds`.
    ///
    /// Centroid filtering is what the viewport layer wants: a cell
    /// straddling the viewport edge is either mostly visible (centroid in)
    /// or mostly not.
    pub fn clusters_in<'a>(
        &'a self,
        bounds: &'a GeoBounds,
    ) -> impl Iterator<Item = &'a VehicleCluster> {
        self.cells.values().filter(|c| bounds.contains(c.centroid()))
    }
}
