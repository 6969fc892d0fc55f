//! Unit tests for population generation and RSU placement.

#[cfg(test)]
mod helpers {
    use ts_core::{GeoBounds, ScaleRng, ScalerConfig};
    use ts_flow::SegmentNetwork;

    /// A synthetic 8×8 grid network inside a 1°×1° box (128 segments).
    pub fn grid_network(seed: u64) -> SegmentNetwork {
        let mut rng = ScaleRng::new(seed);
        let mut net = SegmentNetwork::default();
        net.densify_synthetic(&GeoBounds::new(0.0, 0.0, 1.0, 1.0), 8, &mut rng);
        net
    }

    pub fn test_config(target: u32) -> ScalerConfig {
        ScalerConfig {
            region: GeoBounds::new(0.0, 0.0, 1.0, 1.0),
            target_vehicle_count: target,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod generator {
    use ts_core::{ScaleRng, VehicleType};

    use crate::generate_population;
    use super::helpers::{grid_network, test_config};

    #[test]
    fn total_approximates_target() {
        let net = grid_network(1);
        let cfg = test_config(10_000);
        let mut rng = ScaleRng::new(cfg.seed);
        let pop = generate_population(&net, &cfg, &mut rng);

        // Floor rounding loses at most 1 per segment; the min-1 floor adds
        // at most 1 per segment.
        let diff = pop.vehicles.len() as i64 - 10_000;
        assert!(
            diff.unsigned_abs() as usize <= net.len(),
            "total {} too far from target",
            pop.vehicles.len()
        );
    }

    #[test]
    fn every_segment_populated_when_target_allows() {
        let net = grid_network(2);
        let cfg = test_config(50_000);
        let mut rng = ScaleRng::new(7);
        let pop = generate_population(&net, &cfg, &mut rng);

        for seg in &pop.segments {
            assert!(seg.vehicle_count >= 1, "segment {} starved", seg.id);
        }
    }

    #[test]
    fn segment_counts_match_vehicle_total() {
        let net = grid_network(3);
        let cfg = test_config(5_000);
        let mut rng = ScaleRng::new(3);
        let pop = generate_population(&net, &cfg, &mut rng);

        let counted: u64 = pop.segments.iter().map(|s| s.vehicle_count as u64).sum();
        assert_eq!(counted, pop.vehicles.len() as u64);
    }

    #[test]
    fn vehicle_ids_sequential() {
        let net = grid_network(4);
        let cfg = test_config(2_000);
        let mut rng = ScaleRng::new(4);
        let pop = generate_population(&net, &cfg, &mut rng);

        for (i, v) in pop.vehicles.iter().enumerate() {
            assert_eq!(v.id.index(), i);
        }
    }

    #[test]
    fn attributes_in_range() {
        let net = grid_network(5);
        let cfg = test_config(5_000);
        let mut rng = ScaleRng::new(5);
        let pop = generate_population(&net, &cfg, &mut rng);

        for v in &pop.vehicles {
            assert!(v.trust_score <= 100);
            assert!(v.speed_kmh >= 0.0);
            assert!((0.0..360.0).contains(&v.heading_deg), "heading {}", v.heading_deg);
            assert!(!v.owner.is_empty());
        }
    }

    #[test]
    fn trust_respects_per_type_ranges() {
        let net = grid_network(6);
        let cfg = test_config(20_000);
        let mut rng = ScaleRng::new(6);
        let pop = generate_population(&net, &cfg, &mut rng);

        for v in &pop.vehicles {
            let spec = cfg
                .vehicle_mix
                .iter()
                .find(|s| s.vehicle_type == v.vehicle_type)
                .expect("generated type must come from the mix");
            assert!(
                (spec.trust_range.0..=spec.trust_range.1).contains(&v.trust_score),
                "{} trust {} outside {:?}",
                v.vehicle_type,
                v.trust_score,
                spec.trust_range
            );
        }
    }

    #[test]
    fn positions_stay_near_their_segment() {
        let net = grid_network(7);
        let cfg = test_config(5_000);
        let mut rng = ScaleRng::new(7);
        let pop = generate_population(&net, &cfg, &mut rng);

        // Rebuild the id→segment mapping from the allocation offsets.
        let mut idx = 0usize;
        for seg in &pop.segments {
            let margin = 0.001; // jitter bound + f32 slack
            let min_lat = seg.start.lat.min(seg.end.lat) - margin;
            let max_lat = seg.start.lat.max(seg.end.lat) + margin;
            let min_lon = seg.start.lon.min(seg.end.lon) - margin;
            let max_lon = seg.start.lon.max(seg.end.lon) + margin;
            for v in &pop.vehicles[idx..idx + seg.vehicle_count as usize] {
                assert!(v.pos.lat >= min_lat && v.pos.lat <= max_lat, "{}", v.pos);
                assert!(v.pos.lon >= min_lon && v.pos.lon <= max_lon, "{}", v.pos);
            }
            idx += seg.vehicle_count as usize;
        }
    }

    #[test]
    fn deterministic_for_same_seed() {
        let net = grid_network(8);
        let cfg = test_config(3_000);

        let mut r1 = ScaleRng::new(99);
        let mut r2 = ScaleRng::new(99);
        let a = generate_population(&net, &cfg, &mut r1);
        let b = generate_population(&net, &cfg, &mut r2);

        assert_eq!(a.vehicles.len(), b.vehicles.len());
        for (x, y) in a.vehicles.iter().zip(&b.vehicles) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vehicle_type, y.vehicle_type);
            assert_eq!(x.trust_score, y.trust_score);
            assert_eq!(x.owner, y.owner);
        }
    }

    #[test]
    fn empty_network_yields_empty_population() {
        let net = ts_flow::SegmentNetwork::default();
        let cfg = test_config(1_000);
        let mut rng = ScaleRng::new(1);
        let pop = generate_population(&net, &cfg, &mut rng);
        assert!(pop.vehicles.is_empty());
        assert!(pop.segments.is_empty());
    }

    #[test]
    fn mix_produces_every_type() {
        let net = grid_network(9);
        let cfg = test_config(20_000);
        let mut rng = ScaleRng::new(9);
        let pop = generate_population(&net, &cfg, &mut rng);

        for ty in [
            VehicleType::Car,
            VehicleType::Motorcycle,
            VehicleType::Truck,
            VehicleType::Bus,
            VehicleType::Emergency,
        ] {
            assert!(
                pop.vehicles.iter().any(|v| v.vehicle_type == ty),
                "no {ty} in a 20k population"
            );
        }
    }
}

#[cfg(test)]
mod rsu {
    use ts_core::{GeoBounds, RsuConfig, ScaleRng};

    use crate::place_rsus;

    fn config(count: usize, separation_m: f32) -> RsuConfig {
        RsuConfig {
            target_count:     count,
            min_separation_m: separation_m,
            ..Default::default()
        }
    }

    #[test]
    fn respects_min_separation() {
        let region = GeoBounds::new(28.40, 76.85, 28.90, 77.35);
        let cfg = config(80, 800.0);
        let mut rng = ScaleRng::new(11);
        let units = place_rsus(&cfg, &region, &mut rng);

        assert!(!units.is_empty());
        for (i, a) in units.iter().enumerate() {
            for b in &units[i + 1..] {
                let d = a.pos.distance_m(b.pos);
                assert!(d >= 800.0 - 1.0, "{} and {} only {d:.0} m apart", a.label, b.label);
            }
        }
    }

    #[test]
    fn strategic_locations_first() {
        let region = GeoBounds::new(28.40, 76.85, 28.90, 77.35);
        let cfg = config(40, 500.0);
        let mut rng = ScaleRng::new(12);
        let units = place_rsus(&cfg, &region, &mut rng);

        assert_eq!(units[0].label, "Connaught Place");
        assert_eq!(units[0].id.index(), 0);
    }

    #[test]
    fn degrades_in_saturated_region() {
        // A ~1 km box cannot hold 50 units 800 m apart; placement must stop
        // early without panicking.
        let region = GeoBounds::new(28.60, 77.20, 28.61, 77.21);
        let cfg = RsuConfig {
            target_count:     50,
            min_separation_m: 800.0,
            strategic:        vec![],
            ..Default::default()
        };
        let mut rng = ScaleRng::new(13);
        let units = place_rsus(&cfg, &region, &mut rng);

        assert!(units.len() < 50, "got {} units in a saturated box", units.len());
        assert!(!units.is_empty());
    }

    #[test]
    fn coverage_radius_in_configured_range() {
        let region = GeoBounds::new(0.0, 0.0, 2.0, 2.0);
        let cfg = RsuConfig {
            coverage_radius_m: (250.0, 600.0),
            strategic:         vec![],
            ..config(30, 1_000.0)
        };
        let mut rng = ScaleRng::new(14);
        for unit in place_rsus(&cfg, &region, &mut rng) {
            assert!((250.0..=600.0).contains(&unit.coverage_radius_m));
        }
    }

    #[test]
    fn out_of_region_strategic_skipped() {
        let region = GeoBounds::new(0.0, 0.0, 1.0, 1.0); // excludes Delhi
        let cfg = config(10, 500.0);
        let mut rng = ScaleRng::new(15);
        let units = place_rsus(&cfg, &region, &mut rng);

        for unit in &units {
            assert!(region.contains(unit.pos), "{} placed outside region", unit.label);
        }
    }

    #[test]
    fn ids_sequential() {
        let region = GeoBounds::new(0.0, 0.0, 2.0, 2.0);
        let cfg = config(25, 500.0);
        let mut rng = ScaleRng::new(16);
        let units = place_rsus(&cfg, &region, &mut rng);
        for (i, unit) in units.iter().enumerate() {
            assert_eq!(unit.id.index(), i);
        }
    }
}
