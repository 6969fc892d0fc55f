//! `ts-flow` — the external traffic-data boundary and segment processor.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`sample`]   | `FlowSample`, `Incident`, `CongestionZone`               |
//! | [`provider`] | `FlowProvider` trait (the inbound fetch boundary)        |
//! | [`segment`]  | `RoadSegment`, `SegmentNetwork`, synthetic densification |
//! | [`error`]    | `FlowError`, `FlowResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.   |

pub mod error;
pub mod provider;
pub mod sample;
pub mod segment;


pub use error::{FlowError, FlowResult};
pub use provider::FlowProvider;
pub use sample::{CongestionZone, FlowSample, Incident};
pub use segment::{RoadSegment, SegmentNetwork, congestion_pct};
