//! The synthetic vehicle record.

use ts_core::{GeoPoint, VehicleId, VehicleType};

/// One synthetic vehicle.
///
/// Created in bulk by the generator, never individually mutated — a refresh
/// replaces the entire population, so there is no per-vehicle lifecycle to
/// track.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id: VehicleId,
    pub owner: String,
    pub vehicle_type: VehicleType,
    /// Trust score 0–100; the range depends on the vehicle type.
    pub trust_score: u8,
    pub pos: GeoPoint,
    pub speed_kmh: f32,
    /// Compass heading, degrees in [0, 360).
    pub heading_deg: f32,
    pub active: bool,
}
