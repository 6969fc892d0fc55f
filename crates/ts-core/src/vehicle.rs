//! Vehicle category enum shared across all population-related crates.
//!
//! The categorical distribution over these variants (and the per-type trust
//! score ranges) lives in [`ScalerConfig::vehicle_mix`][crate::ScalerConfig],
//! not here: the enum is the vocabulary, the config is the policy.

/// The category of a synthetic vehicle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum VehicleType {
    /// Private car (the bulk of the population).
    #[default]
    Car,
    /// Two-wheeler.
    Motorcycle,
    /// Goods vehicle.
    Truck,
    /// Scheduled public transit bus.
    Bus,
    /// Ambulance / fire / police — high-trust by policy.
    Emergency,
}

impl VehicleType {
    /// Human-readable label, useful for CSV column values and map legends.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Car        => "car",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Truck      => "truck",
            VehicleType::Bus        => "bus",
            VehicleType::Emergency  => "emergency",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
