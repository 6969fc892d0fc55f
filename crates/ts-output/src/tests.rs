//! Integration tests for ts-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{RefreshSummaryRow, VehicleRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn vehicle_row(vehicle_id: u32) -> VehicleRow {
        VehicleRow {
            vehicle_id,
            generated_unix_secs: 1_700_000_000,
            vehicle_type:        "car".into(),
            trust_score:         80,
            lat:                 28.6,
            lon:                 77.2,
            speed_kmh:           35.5,
            heading_deg:         90.0,
            active:              true,
        }
    }

    fn summary_row() -> RefreshSummaryRow {
        RefreshSummaryRow {
            generated_unix_secs: 1_700_000_000,
            elapsed_ms:          250,
            segments:            1_800,
            total_length_km:     2_400.5,
            vehicles:            1_000_000,
            rsus:                120,
            clusters:            2_000,
            congestion_zones:    4,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("vehicle_snapshots.csv").exists());
        assert!(dir.path().join("refresh_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["vehicle_id", "generated_unix_secs", "vehicle_type", "trust_score",
             "lat", "lon", "speed_kmh", "heading_deg", "active"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("refresh_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["generated_unix_secs", "elapsed_ms", "segments", "total_length_km",
             "vehicles", "rsus", "clusters", "congestion_zones"]
        );
    }

    #[test]
    fn csv_vehicle_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![vehicle_row(0), vehicle_row(1), vehicle_row(2)];
        w.write_vehicles(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0");   // vehicle_id
        assert_eq!(&read_rows[0][2], "car"); // vehicle_type
        assert_eq!(&read_rows[0][8], "1");   // active as integer
        assert_eq!(&read_rows[1][0], "1");
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_refresh_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_refresh_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("refresh_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "1700000000"); // generated_unix_secs
        assert_eq!(&read_rows[0][4], "1000000");    // vehicles
        assert_eq!(&read_rows[0][5], "120");        // rsus
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_vehicles(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use std::time::Duration;

        use ts_core::{GeoBounds, GeoPoint, ScalerConfig};
        use ts_flow::{FlowProvider, FlowResult, FlowSample};
        use ts_scaler::TrafficScaler;

        use crate::observer::ScalerOutputObserver;

        struct Canned;

        impl FlowProvider for Canned {
            fn fetch_flow(&mut self) -> FlowResult<Vec<FlowSample>> {
                Ok(vec![FlowSample {
                    free_flow_kmh: 60.0,
                    current_kmh:   40.0,
                    coordinates: vec![
                        GeoPoint::new(28.60, 77.05),
                        GeoPoint::new(28.60, 77.15),
                    ],
                }])
            }
        }

        let config = ScalerConfig {
            region:               GeoBounds::new(28.50, 77.00, 28.70, 77.20),
            target_vehicle_count: 500,
            synthetic_grid_steps: 4,
            cache_timeout:        Duration::from_secs(3600),
            ..Default::default()
        };

        let mut scaler = TrafficScaler::new(config, Canned).unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = ScalerOutputObserver::new(writer).with_max_vehicle_rows(100);
        scaler.refresh(&mut obs).unwrap();
        obs.finish();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut summaries = csv::Reader::from_path(dir.path().join("refresh_summaries.csv")).unwrap();
        let rows: Vec<_> = summaries.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);

        // Cap of 100 bounds the vehicle dump even though more were generated.
        let mut vehicles = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let rows: Vec<_> = vehicles.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 100);
    }
}
