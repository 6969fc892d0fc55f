//! Flow-boundary error type.

use thiserror::Error;

/// Errors produced by `ts-flow` providers.
///
/// The segment processor itself never errors: malformed samples are skipped
/// per-segment so a partially bad upstream payload still yields a usable
/// network.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The upstream flow or incident API call failed (network, HTTP status,
    /// decode).  Providers flatten their transport-specific errors into this
    /// variant; the orchestrator recovers by retaining cached state.
    #[error("upstream fetch failed: {0}")]
    Upstream(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FlowResult<T> = Result<T, FlowError>;
