//! Refresh-lifecycle observer trait.
//!
//! The engine never prints or logs on its own; applications attach an
//! observer to hear about refresh progress and fetch failures.  All methods
//! have default no-op implementations so implementors only override what
//! they care about.

use std::time::Duration;

use ts_flow::FlowError;

use crate::snapshot::Snapshot;

/// Callbacks invoked by [`TrafficScaler::refresh`][crate::TrafficScaler::refresh].
///
/// # Example — console reporter
///
/// ```rust,ignore
/// struct Console;
///
/// impl ScalerObserver for Console {
///     fn on_refresh_end(&mut self, snapshot: &Snapshot, elapsed: Duration) {
///         println!(
///             "refreshed: {} vehicles in {:.2} s",
///             snapshot.vehicles.len(),
///             elapsed.as_secs_f64()
///         );
///     }
/// }
/// ```
pub trait ScalerObserver {
    /// The pipeline is about to run (the freshness check passed).
    fn on_refresh_start(&mut self) {}

    /// A refresh was coalesced: the cache is still fresh (`age` since the
    /// last successful run).
    fn on_refresh_skipped(&mut self, _age: Duration) {}

    /// The flow fetch failed; the previous snapshot is retained.
    fn on_flow_error(&mut self, _err: &FlowError) {}

    /// The incident fetch failed (best-effort feed); previous congestion
    /// zones are retained.
    fn on_incident_error(&mut self, _err: &FlowError) {}

    /// The pipeline completed and the new snapshot is live.
    fn on_refresh_end(&mut self, _snapshot: &Snapshot, _elapsed: Duration) {}
}

/// A [`ScalerObserver`] that does nothing.
pub struct NoopObserver;

impl ScalerObserver for NoopObserver {}
