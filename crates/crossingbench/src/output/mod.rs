//! Rendering of model results: CSV tables, JSON reports, and atomic file writes.

mod csv;
mod io;
mod report;

pub use csv::{SWEEP_HEADER, UNDEFINED_PLACEHOLDER, sweep_csv, write_sweep_csv};
pub use io::atomic_write;
pub use report::{CompareReport, ModelIdentity, PointReport, SweepReport, format_optional};
