//! `ts-core` — foundational types for the `trafficscale` engine.
//!
//! This crate is a dependency of every other `ts-*` crate.  It intentionally
//! has no `ts-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `SegmentId`, `VehicleId`, `RsuId`                     |
//! | [`geo`]     | `GeoPoint`, `GeoBounds`, haversine distance, bearing  |
//! | [`rng`]     | `ScaleRng` — seeded RNG with child derivation         |
//! | [`vehicle`] | `VehicleType` enum                                    |
//! | [`config`]  | `ScalerConfig` and its nested sections                |
//! | [`error`]   | `ScaleError`, `ScaleResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RsuConfig, ScalerConfig, VehicleTypeSpec, ViewportConfig};
pub use error::{ScaleError, ScaleResult};
pub use geo::{GeoBounds, GeoPoint};
pub use ids::{RsuId, SegmentId, VehicleId};
pub use rng::ScaleRng;
pub use vehicle::VehicleType;
