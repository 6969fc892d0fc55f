//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `ScaleError` via `From` impls or wrap it as one variant.  Query-facing
//! code never surfaces errors at all — per the engine's contract, queries
//! are best-effort and return (possibly empty) results.

use thiserror::Error;

/// The top-level error type for `ts-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ts-*` crates.
pub type ScaleResult<T> = Result<T, ScaleError>;
