//! `ts-cluster` — fixed-grid spatial clustering of a vehicle population.
//!
//! # Design
//!
//! One O(n) pass assigns every position to a grid cell keyed by
//! `floor(lat/grid)` / `floor(lon/grid)`.  Each cell keeps:
//!
//! - a running count and running mean position (incremental update, so
//!   centroid memory is O(cells), not O(vehicles));
//! - a **bounded** sample of member indices for high-zoom rendering — the
//!   cap trades individual-vehicle fidelity in dense cells for memory.
//!
//! Members are stored as `u32` indices into the caller's population vector,
//! never as copies: the index stays cheap even at millions of vehicles.
//!
//! The cell map uses `FxHashMap`: with integer-pair keys, SipHash would
//! dominate the build pass.

pub mod cell;
pub mod index;


pub use cell::CellKey;
pub use index::{ClusterIndex, VehicleCluster};
