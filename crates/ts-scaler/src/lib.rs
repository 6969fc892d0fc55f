//! `ts-scaler` — the orchestrator and viewport query layer.
//!
//! A [`TrafficScaler`] owns one cached [`Snapshot`] (segments, vehicles,
//! RSUs, congestion zones, cluster index) and drives the
//! fetch → process → generate → cluster pipeline.  Queries are answered
//! from the cache; the pipeline only runs on [`TrafficScaler::refresh`] and
//! only when the cache has gone stale.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`scaler`]   | `TrafficScaler`, `RefreshOutcome`, `ScalerStats`       |
//! | [`snapshot`] | `Snapshot` — one refresh cycle's cached state          |
//! | [`viewport`] | `VehicleMarker`, zoom-tier sampling                    |
//! | [`observer`] | `ScalerObserver`, `NoopObserver`                       |
//! | [`error`]    | `ScalerError`, `ScalerResult<T>`                       |

pub mod error;
pub mod observer;
pub mod scaler;
pub mod snapshot;
pub mod viewport;


pub use error::{ScalerError, ScalerResult};
pub use observer::{NoopObserver, ScalerObserver};
pub use scaler::{RefreshOutcome, ScalerStats, TrafficScaler};
pub use snapshot::Snapshot;
pub use viewport::VehicleMarker;
