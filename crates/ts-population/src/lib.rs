//! `ts-population` — synthetic vehicle population and RSU placement.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`vehicle`]   | `Vehicle` record                                      |
//! | [`generator`] | `generate_population` — proportional distribution     |
//! | [`rsu`]       | `RoadsideUnit`, `place_rsus` — min-separation layout  |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Per-segment generation on Rayon (identical output).     |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.      |

pub mod generator;
pub mod rsu;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use generator::{GeneratedPopulation, generate_population};
pub use rsu::{RoadsideUnit, place_rsus};
pub use vehicle::Vehicle;
