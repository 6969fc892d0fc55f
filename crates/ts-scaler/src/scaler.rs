//! The caching orchestrator.
//!
//! [`TrafficScaler`] owns the provider, the RNG, and one cached
//! [`Snapshot`].  [`TrafficScaler::refresh`] runs the full pipeline —
//! fetch, segment processing, synthetic densification, population
//! generation, RSU placement, clustering, incident mapping — and swaps the
//! result in as a unit.  Every query method answers from the cache and
//! never blocks on the network.

use std::time::Instant;

use ts_cluster::ClusterIndex;
use ts_core::{GeoBounds, ScaleRng, ScalerConfig};
use ts_flow::{CongestionZone, FlowProvider, SegmentNetwork};
use ts_population::{generate_population, place_rsus, RoadsideUnit};

use crate::error::ScalerResult;
use crate::observer::ScalerObserver;
use crate::snapshot::{unix_now, Snapshot};
use crate::viewport::{self, VehicleMarker};

/// What a [`TrafficScaler::refresh`] call actually did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The pipeline ran and a new snapshot is live.
    Refreshed,
    /// The cache was still within `cache_timeout`; nothing changed.
    SkippedFresh,
}

/// Summary counters over the current snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScalerStats {
    pub total_vehicles: usize,
    pub total_rsus: usize,
    pub clusters: usize,
    pub segments: usize,
    /// Unix seconds of the last successful refresh; `None` before the first.
    pub last_updated_unix_secs: Option<i64>,
}

/// The engine: one provider, one config, one cached snapshot.
///
/// Single-threaded by design.  Callers needing concurrent queries should
/// clone the [`Snapshot`] out and share that; the scaler itself is the
/// single writer.
pub struct TrafficScaler<P: FlowProvider> {
    config: ScalerConfig,
    provider: P,
    rng: ScaleRng,
    snapshot: Snapshot,
    last_refresh: Option<Instant>,
}

impl<P: FlowProvider> TrafficScaler<P> {
    /// Validate `config` and build an empty (not yet refreshed) scaler.
    pub fn new(config: ScalerConfig, provider: P) -> ScalerResult<Self> {
        config.validate()?;
        let rng = ScaleRng::new(config.seed);
        Ok(TrafficScaler {
            config,
            provider,
            rng,
            snapshot: Snapshot::empty(),
            last_refresh: None,
        })
    }

    /// Run the pipeline, unless the cache is still fresh.
    ///
    /// On a flow-fetch failure the previous snapshot is retained untouched
    /// and the error is returned; queries keep answering from stale data.
    /// An incident-fetch failure is non-fatal: the refresh completes with
    /// the previous cycle's congestion zones carried over.
    pub fn refresh<O: ScalerObserver>(&mut self, obs: &mut O) -> ScalerResult<RefreshOutcome> {
        if let Some(at) = self.last_refresh {
            let age = at.elapsed();
            if age < self.config.cache_timeout {
                obs.on_refresh_skipped(age);
                return Ok(RefreshOutcome::SkippedFresh);
            }
        }

        obs.on_refresh_start();
        let started = Instant::now();

        let samples = match self.provider.fetch_flow() {
            Ok(samples) => samples,
            Err(err) => {
                obs.on_flow_error(&err);
                return Err(err.into());
            }
        };

        let mut network = SegmentNetwork::from_samples(&samples);
        if network.is_sparse(self.config.min_segment_count) {
            network.densify_synthetic(
                &self.config.region,
                self.config.synthetic_grid_steps,
                &mut self.rng,
            );
        }

        let population = generate_population(&network, &self.config, &mut self.rng);
        let rsus = place_rsus(&self.config.rsu, &self.config.region, &mut self.rng);

        let clusters = ClusterIndex::build(
            population.vehicles.iter().map(|v| v.pos),
            self.config.grid_size_deg,
            self.config.cluster_sample_cap,
        );

        let zones = match self.provider.fetch_incidents() {
            Ok(incidents) => incidents.into_iter().map(CongestionZone::from).collect(),
            Err(err) => {
                obs.on_incident_error(&err);
                self.snapshot.zones.clone()
            }
        };

        self.snapshot = Snapshot {
            segments: population.segments,
            total_length_km: network.total_length_km,
            vehicles: population.vehicles,
            rsus,
            zones,
            clusters,
            generated_unix_secs: unix_now(),
        };
        self.last_refresh = Some(Instant::now());

        obs.on_refresh_end(&self.snapshot, started.elapsed());
        Ok(RefreshOutcome::Refreshed)
    }

    /// Mark the cache stale so the next [`refresh`][Self::refresh] runs the
    /// pipeline regardless of age.  The snapshot itself stays queryable.
    pub fn invalidate(&mut self) {
        self.last_refresh = None;
    }

    /// Viewport query: markers for the given bounds and zoom level.
    ///
    /// Needs `&mut self` because mid-tier cluster sampling draws from the
    /// scaler's RNG.
    pub fn vehicles(&mut self, bounds: Option<&GeoBounds>, zoom: u8) -> Vec<VehicleMarker> {
        viewport::query(
            &self.snapshot,
            bounds,
            zoom,
            &self.config.viewport,
            &mut self.rng,
        )
    }

    /// RSUs inside `bounds`, or all of them when no bounds are given.
    pub fn rsus(&self, bounds: Option<&GeoBounds>) -> Vec<RoadsideUnit> {
        match bounds {
            None => self.snapshot.rsus.clone(),
            Some(b) => self
                .snapshot
                .rsus
                .iter()
                .filter(|r| b.contains(r.pos))
                .cloned()
                .collect(),
        }
    }

    /// Current congestion zones (empty before the first refresh).
    pub fn congestion(&self) -> &[CongestionZone] {
        &self.snapshot.zones
    }

    pub fn stats(&self) -> ScalerStats {
        ScalerStats {
            total_vehicles: self.snapshot.vehicles.len(),
            total_rsus: self.snapshot.rsus.len(),
            clusters: self.snapshot.clusters.len(),
            segments: self.snapshot.segments.len(),
            last_updated_unix_secs: self
                .snapshot
                .is_populated()
                .then_some(self.snapshot.generated_unix_secs),
        }
    }

    /// Borrow the current snapshot (e.g. to clone it out for export).
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    /// Mutable access to the provider (rotate credentials, point a replay
    /// provider at a new file).  Does not invalidate the cache.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }
}
