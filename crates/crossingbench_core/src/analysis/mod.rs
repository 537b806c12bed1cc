//! Sweep and comparison procedures layered on the cost model.
//!
//! # Sweep
//!
//! A sweep holds compute bytes fixed and walks crossing volume over a
//! log-spaced range, recording the decomposed energy and a local elasticity
//! estimate at each sample:
//!
//! ```ignore
//! use crossingbench_core::analysis::{SweepConfig, sweep};
//!
//! let config = SweepConfig {
//!     cross_min: 256,
//!     cross_max: 524_288,
//!     steps: 12,
//!     ..Default::default()
//! };
//! let rows = sweep(&compute, &boundary, &config)?;
//! let summary = SweepSummary::from_rows(&rows);
//! ```
//!
//! # Compare
//!
//! A comparison evaluates a baseline crossing volume and the same workload
//! with crossing volume divided by a reduction factor:
//!
//! ```ignore
//! let config = CompareConfig { cross_bytes: 196_608, reduce_factor: 3.0, ..Default::default() };
//! let result = compare(&compute, &boundary, &config)?;
//! println!("gain: {:.1}%", result.energy_gain_fraction * 100.0);
//! ```

mod comparison;
mod elasticity;
mod summary;
mod volume_sweep;

pub use comparison::*;
pub use elasticity::*;
pub use summary::*;
pub use volume_sweep::*;
