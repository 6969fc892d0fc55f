//! The `FlowProvider` trait — the inbound data boundary.

use crate::error::FlowResult;
use crate::sample::{FlowSample, Incident};

/// Pluggable source of traffic flow samples and incident reports.
///
/// Implement this for whatever upstream the deployment talks to (an HTTP
/// traffic API, a replay file, a synthetic generator for demos and tests).
/// The orchestrator calls `fetch_flow` once per refresh cycle; transport
/// concerns — timeouts, retries, authentication — belong inside the
/// implementation, not in the engine.
///
/// # Error contract
///
/// A `fetch_flow` failure aborts the refresh and the orchestrator retains
/// its previous snapshot.  A `fetch_incidents` failure is best-effort: it is
/// reported through the observer and the previous congestion zones are kept.
///
/// # Example — canned provider for tests
///
/// ```rust,ignore
/// struct Canned(Vec<FlowSample>);
///
/// impl FlowProvider for Canned {
///     fn fetch_flow(&mut self) -> FlowResult<Vec<FlowSample>> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait FlowProvider {
    /// Fetch the current flow samples.  May suspend on I/O internally; the
    /// engine treats the call as one opaque, fallible operation.
    fn fetch_flow(&mut self) -> FlowResult<Vec<FlowSample>>;

    /// Fetch current incident reports.
    ///
    /// Default: no incidents.  Providers without an incident feed don't
    /// need to implement this.
    fn fetch_incidents(&mut self) -> FlowResult<Vec<Incident>> {
        Ok(vec![])
    }
}
