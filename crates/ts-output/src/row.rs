//! Plain data row types written by output backends.

/// One vehicle's state at snapshot time.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRow {
    pub vehicle_id:          u32,
    /// Unix seconds of the refresh that produced this row.
    pub generated_unix_secs: i64,
    pub vehicle_type:        String,
    pub trust_score:         u8,
    pub lat:                 f32,
    pub lon:                 f32,
    pub speed_kmh:           f32,
    pub heading_deg:         f32,
    pub active:              bool,
}

/// Summary statistics for one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshSummaryRow {
    pub generated_unix_secs: i64,
    pub elapsed_ms:          u64,
    pub segments:            u64,
    pub total_length_km:     f64,
    pub vehicles:            u64,
    pub rsus:                u64,
    pub clusters:            u64,
    pub congestion_zones:    u64,
}
