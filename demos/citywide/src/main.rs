//! citywide — city-scale demo for the traffic scaling engine.
//!
//! Scales a handful of synthetic flow probes over Delhi NCR up to 120 K
//! vehicles, places RSUs, clusters the population, and answers viewport
//! queries at three zoom levels.  Scale comment: the shipped deployment
//! runs the same pipeline at 1 M vehicles; raise TARGET_VEHICLES and go.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use ts_core::{GeoBounds, GeoPoint, ScaleRng, ScalerConfig};
use ts_flow::{FlowProvider, FlowResult, FlowSample, Incident};
use ts_output::{CsvWriter, ScalerOutputObserver};
use ts_scaler::{RefreshOutcome, TrafficScaler};

// ── Constants ─────────────────────────────────────────────────────────────────

const TARGET_VEHICLES: u32 = 120_000;
const SEED:            u64 = 42;
const PROBE_COUNT:     usize = 24;

// ── Synthetic provider ────────────────────────────────────────────────────────

/// Stands in for the live traffic API: random-walk polylines with plausible
/// speeds, plus a couple of fixed incidents.  Deliberately few probes so the
/// synthetic densification pass kicks in, as it does on a real sparse feed.
struct SyntheticFlowProvider {
    region: GeoBounds,
    rng:    ScaleRng,
}

impl SyntheticFlowProvider {
    fn new(region: GeoBounds, seed: u64) -> Self {
        Self { region, rng: ScaleRng::new(seed) }
    }
}

impl FlowProvider for SyntheticFlowProvider {
    fn fetch_flow(&mut self) -> FlowResult<Vec<FlowSample>> {
        let mut samples = Vec::with_capacity(PROBE_COUNT);
        for _ in 0..PROBE_COUNT {
            let mut point = self.region.random_point(&mut self.rng);
            let len = self.rng.gen_range(3..=6usize);
            let mut coordinates = Vec::with_capacity(len);
            for _ in 0..len {
                coordinates.push(point);
                point.lat += self.rng.gen_range(-0.01..0.01f32);
                point.lon += self.rng.gen_range(-0.01..0.01f32);
            }

            let free_flow_kmh = self.rng.gen_range(40.0..90.0f32);
            let current_kmh = free_flow_kmh * self.rng.gen_range(0.3..1.0f32);
            samples.push(FlowSample { free_flow_kmh, current_kmh, coordinates });
        }
        Ok(samples)
    }

    fn fetch_incidents(&mut self) -> FlowResult<Vec<Incident>> {
        Ok(vec![
            Incident {
                label:              "Accident on NH48".into(),
                position:           GeoPoint::new(28.55, 77.08),
                severity_pct:       85.0,
                observed_unix_secs: 1_700_000_000,
            },
            Incident {
                label:              "Waterlogging near ITO".into(),
                position:           GeoPoint::new(28.63, 77.24),
                severity_pct:       45.0,
                observed_unix_secs: 1_700_000_000,
            },
        ])
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== citywide — traffic scaling engine ===");
    println!("Target: {TARGET_VEHICLES} vehicles  |  Seed: {SEED}");
    println!();

    let config = ScalerConfig {
        target_vehicle_count: TARGET_VEHICLES,
        seed: SEED,
        ..Default::default()
    };
    let region = config.region;

    let provider = SyntheticFlowProvider::new(region, SEED);
    let mut scaler = TrafficScaler::new(config, provider)?;

    // Output: refresh summaries + a bounded vehicle dump.
    std::fs::create_dir_all("output/citywide")?;
    let writer = CsvWriter::new(Path::new("output/citywide"))?;
    let mut obs = ScalerOutputObserver::new(writer);

    // 1. First refresh runs the full pipeline.
    let t0 = Instant::now();
    scaler.refresh(&mut obs)?;
    println!("Refresh complete in {:.3} s", t0.elapsed().as_secs_f64());

    let stats = scaler.stats();
    println!("  segments : {}", stats.segments);
    println!("  vehicles : {}", stats.total_vehicles);
    println!("  RSUs     : {}", stats.total_rsus);
    println!("  clusters : {}", stats.clusters);
    println!();

    // 2. A second refresh inside the cache window is coalesced.
    match scaler.refresh(&mut obs)? {
        RefreshOutcome::SkippedFresh => println!("Second refresh coalesced (cache fresh)"),
        RefreshOutcome::Refreshed => println!("Second refresh ran (unexpected with a 60 s window)"),
    }

    // 3. Viewport queries across the tiers.
    println!();
    println!("{:<22} {:<6} {:<10}", "Query", "Zoom", "Markers");
    println!("{}", "-".repeat(40));

    let markers = scaler.vehicles(None, 5);
    println!("{:<22} {:<6} {:<10}", "city overview", 5, markers.len());

    let downtown = GeoBounds::new(28.58, 77.15, 28.68, 77.28);
    let markers = scaler.vehicles(Some(&downtown), 10);
    println!("{:<22} {:<6} {:<10}", "downtown (sampled)", 10, markers.len());

    let markers = scaler.vehicles(Some(&downtown), 14);
    println!("{:<22} {:<6} {:<10}", "downtown (raw)", 14, markers.len());

    // 4. Congestion zones from the incident feed.
    println!();
    println!("Congestion zones:");
    for zone in scaler.congestion() {
        println!("  {:>5.1} %  {}  at {}", zone.level_pct, zone.label, zone.position);
    }

    // 5. Force a rerun to show invalidation.
    scaler.invalidate();
    let t0 = Instant::now();
    scaler.refresh(&mut obs)?;
    println!();
    println!(
        "Forced refresh after invalidate() in {:.3} s",
        t0.elapsed().as_secs_f64()
    );

    obs.finish();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    println!("CSV output written to output/citywide/");

    Ok(())
}
