//! `ts-output` — offline export for the traffic scaling engine.
//!
//! One backend today:
//!
//! | Backend | Files created                                         |
//! |---------|-------------------------------------------------------|
//! | CSV     | `vehicle_snapshots.csv`, `refresh_summaries.csv`      |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`ScalerOutputObserver`], which implements `ts_scaler::ScalerObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ts_output::{CsvWriter, ScalerOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = ScalerOutputObserver::new(writer);
//! scaler.refresh(&mut obs).unwrap();
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ScalerOutputObserver;
pub use row::{RefreshSummaryRow, VehicleRow};
pub use writer::OutputWriter;
