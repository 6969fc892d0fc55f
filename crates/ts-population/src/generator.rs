//! Population generator.
//!
//! Distributes the configured global vehicle target across the segment
//! network proportionally to length share, then synthesizes per-vehicle
//! attributes.  Positions are interpolated along the segment with a small
//! jitter; speeds follow the segment's current speed with ±20 % noise.
//!
//! # Determinism
//!
//! Each segment generates from its own child RNG derived by fixed offset
//! (`segment id`) from a base seed drawn once from the caller's RNG, so the
//! result is byte-identical whether the per-segment pass runs sequentially
//! or — with the `parallel` feature — on Rayon's thread pool.

use ts_core::{ScaleRng, ScalerConfig, VehicleId, VehicleTypeSpec};
use ts_flow::{RoadSegment, SegmentNetwork};

use crate::vehicle::Vehicle;

/// Max positional jitter applied to an interpolated position, degrees
/// (~55 m of lateral scatter — keeps vehicles visually off the centreline).
const POSITION_JITTER_DEG: f32 = 0.000_5;

/// Relative speed noise around the segment's current speed.
const SPEED_NOISE: f32 = 0.2;

/// Heading scatter around the segment bearing, degrees.
const HEADING_JITTER_DEG: f32 = 10.0;

/// Probability that a generated vehicle is active.
const ACTIVE_PROBABILITY: f64 = 0.97;

const OWNER_FIRST: &[&str] = &[
    "Aarav", "Ananya", "Arjun", "Dev", "Diya", "Farhan", "Ishaan", "Kabir",
    "Karan", "Lakshmi", "Meera", "Nisha", "Pooja", "Priya", "Rahul", "Rajesh",
    "Rohan", "Sanya", "Simran", "Sneha", "Vihaan", "Vikram",
];

const OWNER_LAST: &[&str] = &[
    "Banerjee", "Bose", "Chopra", "Das", "Gupta", "Iyer", "Joshi", "Kapoor",
    "Khan", "Kulkarni", "Malhotra", "Mehta", "Mishra", "Nair", "Patel",
    "Reddy", "Sharma", "Singh", "Verma", "Yadav",
];

// ── GeneratedPopulation ───────────────────────────────────────────────────────

/// Output of one generation pass.
///
/// `segments` is the input segment set with `vehicle_count` filled in, so
/// the cached snapshot reflects the actual per-segment allocation.
pub struct GeneratedPopulation {
    pub vehicles: Vec<Vehicle>,
    pub segments: Vec<RoadSegment>,
}

/// Distribute `cfg.target_vehicle_count` vehicles across `network`.
///
/// Allocation contract: the total approximates the target (floor rounding
/// per segment), and when the target is at least as large as the segment
/// count, every positive-length segment receives at least one vehicle.
pub fn generate_population(
    network: &SegmentNetwork,
    cfg: &ScalerConfig,
    rng: &mut ScaleRng,
) -> GeneratedPopulation {
    let mut segments = network.segments.clone();
    if segments.is_empty() || network.total_length_km <= 0.0 {
        return GeneratedPopulation { vehicles: vec![], segments };
    }

    // Pass 1: per-segment allocation + ID offsets (sequential, cheap).
    let segment_count = segments.len();
    let mut offsets = Vec::with_capacity(segment_count);
    let mut next_id: u32 = 0;
    for seg in &mut segments {
        let n = allocate(
            seg.length_km,
            network.total_length_km,
            cfg.target_vehicle_count,
            segment_count,
        );
        seg.vehicle_count = n;
        offsets.push(next_id);
        next_id += n;
    }

    // Pass 2: per-segment generation from fixed-offset child RNGs.
    let base_seed: u64 = rng.random();
    let spawn = |(seg, &offset): (&RoadSegment, &u32)| -> Vec<Vehicle> {
        let mut seg_rng = rng.child_fixed(base_seed, seg.id.0 as u64);
        generate_for_segment(seg, offset, cfg, &mut seg_rng)
    };

    #[cfg(not(feature = "parallel"))]
    let batches: Vec<Vec<Vehicle>> = segments.iter().zip(&offsets).map(spawn).collect();

    #[cfg(feature = "parallel")]
    let batches: Vec<Vec<Vehicle>> = {
        use rayon::prelude::*;
        segments
            .par_iter()
            .zip(offsets.par_iter())
            .map(spawn)
            .collect()
    };

    let mut vehicles = Vec::with_capacity(next_id as usize);
    for batch in batches {
        vehicles.extend(batch);
    }

    GeneratedPopulation { vehicles, segments }
}

/// Proportional floor allocation with a one-vehicle floor for positive-length
/// segments whenever the target can afford it.
fn allocate(length_km: f32, total_length_km: f64, target: u32, segment_count: usize) -> u32 {
    if length_km <= 0.0 {
        return 0;
    }
    let exact = target as f64 * (length_km as f64 / total_length_km);
    let n = exact.floor() as u32;
    if n == 0 && target as usize >= segment_count {
        1
    } else {
        n
    }
}

fn generate_for_segment(
    seg: &RoadSegment,
    id_offset: u32,
    cfg: &ScalerConfig,
    rng: &mut ScaleRng,
) -> Vec<Vehicle> {
    let bearing = seg.start.initial_bearing_deg(seg.end);
    let mut out = Vec::with_capacity(seg.vehicle_count as usize);

    for k in 0..seg.vehicle_count {
        let t: f32 = rng.gen_range(0.0..1.0);
        let mut pos = seg.start.lerp(seg.end, t);
        pos.lat += rng.gen_range(-POSITION_JITTER_DEG..POSITION_JITTER_DEG);
        pos.lon += rng.gen_range(-POSITION_JITTER_DEG..POSITION_JITTER_DEG);

        let speed_kmh =
            (seg.current_kmh * (1.0 + rng.gen_range(-SPEED_NOISE..SPEED_NOISE))).max(0.0);

        let heading_deg = (bearing
            + rng.gen_range(-HEADING_JITTER_DEG..HEADING_JITTER_DEG))
        .rem_euclid(360.0);

        let spec = pick_type(&cfg.vehicle_mix, rng);
        let (lo, hi) = spec.trust_range;
        let trust_score = rng.gen_range(lo..=hi);

        // Name pools are small on purpose: owner identity is dashboard
        // garnish, not a keyed entity.
        let first = rng.choose(OWNER_FIRST).copied().unwrap_or("Anon");
        let last = rng.choose(OWNER_LAST).copied().unwrap_or("");
        let owner = format!("{first} {last}");

        out.push(Vehicle {
            id: VehicleId(id_offset + k),
            owner,
            vehicle_type: spec.vehicle_type,
            trust_score,
            pos,
            speed_kmh,
            heading_deg,
            active: rng.gen_bool(ACTIVE_PROBABILITY),
        });
    }
    out
}

/// Weighted categorical draw over the configured mix.
///
/// `mix` is non-empty (enforced by `ScalerConfig::validate`).
fn pick_type<'a>(mix: &'a [VehicleTypeSpec], rng: &mut ScaleRng) -> &'a VehicleTypeSpec {
    debug_assert!(!mix.is_empty());
    let total: f32 = mix.iter().map(|s| s.weight).sum();
    let mut x = rng.gen_range(0.0..total);
    for spec in mix {
        if x < spec.weight {
            return spec;
        }
        x -= spec.weight;
    }
    // Floating-point edge: x landed exactly on the upper bound.
    &mix[mix.len() - 1]
}
