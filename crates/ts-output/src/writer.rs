//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RefreshSummaryRow, VehicleRow};

/// Trait implemented by output backends (CSV today; the seam exists so a
/// database or columnar backend slots in without touching the observer).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`ScalerOutputObserver::take_error`][crate::ScalerOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of vehicle rows.
    fn write_vehicles(&mut self, rows: &[VehicleRow]) -> OutputResult<()>;

    /// Write one refresh summary row.
    fn write_refresh_summary(&mut self, row: &RefreshSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
