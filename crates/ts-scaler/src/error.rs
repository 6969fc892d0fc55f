//! Orchestrator error type.
//!
//! Only [`TrafficScaler::refresh`][crate::TrafficScaler::refresh] is
//! fallible — it touches the network boundary.  Query methods return
//! best-effort (possibly empty) results and never surface errors.

use thiserror::Error;

use ts_core::ScaleError;
use ts_flow::FlowError;

/// Errors produced by `ts-scaler`.
#[derive(Debug, Error)]
pub enum ScalerError {
    /// The upstream flow fetch failed.  The previous cached snapshot is
    /// retained untouched.
    #[error("flow fetch failed: {0}")]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Config(#[from] ScaleError),
}

pub type ScalerResult<T> = Result<T, ScalerError>;
