//! Unit tests for ts-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RsuId, SegmentId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VehicleId(0) < VehicleId(1));
        assert!(SegmentId(100) > SegmentId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VehicleId::INVALID.0, u32::MAX);
        assert_eq!(SegmentId::INVALID.0, u32::MAX);
        assert_eq!(RsuId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoBounds, GeoPoint, ScaleRng};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.6315, 77.2167);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_longitude_at_equator() {
        // 1° of longitude at the equator ≈ 111.19 km.
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let d = a.distance_km(b);
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn bearing_cardinals() {
        let origin = GeoPoint::new(0.0, 0.0);
        let east  = origin.initial_bearing_deg(GeoPoint::new(0.0, 1.0));
        let north = origin.initial_bearing_deg(GeoPoint::new(1.0, 0.0));
        assert!((east - 90.0).abs() < 0.5, "east bearing {east}");
        assert!(north < 0.5 || north > 359.5, "north bearing {north}");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(12.0, 24.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.lat - 11.0).abs() < 1e-5);
        assert!((mid.lon - 22.0).abs() < 1e-5);
    }

    #[test]
    fn bounds_contains_edges() {
        let b = GeoBounds::new(0.0, 0.0, 1.0, 1.0);
        assert!(b.contains(GeoPoint::new(0.0, 0.0)));
        assert!(b.contains(GeoPoint::new(1.0, 1.0)));
        assert!(b.contains(GeoPoint::new(0.5, 0.5)));
        assert!(!b.contains(GeoPoint::new(1.0001, 0.5)));
        assert!(!b.contains(GeoPoint::new(0.5, -0.0001)));
    }

    #[test]
    fn random_point_inside_bounds() {
        let b = GeoBounds::new(28.40, 76.85, 28.90, 77.35);
        let mut rng = ScaleRng::new(1);
        for _ in 0..1_000 {
            assert!(b.contains(b.random_point(&mut rng)));
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::ScaleRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = ScaleRng::new(12345);
        let mut r2 = ScaleRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn fixed_children_diverge_by_offset() {
        let parent = ScaleRng::new(1);
        let mut c0 = parent.child_fixed(99, 0);
        let mut c1 = parent.child_fixed(99, 1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "adjacent offsets should diverge");
    }

    #[test]
    fn fixed_children_reproducible() {
        let parent = ScaleRng::new(1);
        let mut a = parent.child_fixed(7, 3);
        let mut b = parent.child_fixed(7, 3);
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_eq!(x, y);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = ScaleRng::new(0);
        for _ in 0..1_000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn sample_indices_distinct_and_clamped() {
        let mut rng = ScaleRng::new(0);
        let picked = rng.sample_indices(10, 4);
        assert_eq!(picked.len(), 4);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4, "indices must be distinct");

        // Requesting more than available returns everything, no panic.
        let all = rng.sample_indices(3, 10);
        assert_eq!(all.len(), 3);
    }
}

#[cfg(test)]
mod config {
    use crate::ScalerConfig;

    #[test]
    fn defaults_validate() {
        assert!(ScalerConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_grid_size_rejected() {
        let cfg = ScalerConfig { grid_size_deg: 0.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_mix_rejected() {
        let cfg = ScalerConfig { vehicle_mix: vec![], ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_trust_range_rejected() {
        let mut cfg = ScalerConfig::default();
        cfg.vehicle_mix[0].trust_range = (90, 10);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_zoom_tiers_rejected() {
        let mut cfg = ScalerConfig::default();
        cfg.viewport.raw_zoom = cfg.viewport.cluster_zoom;
        assert!(cfg.validate().is_err());
    }
}
