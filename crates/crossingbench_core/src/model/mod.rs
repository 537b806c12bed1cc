mod inputs;
mod params;
mod results;

pub use inputs::{CostInputs, DEFAULT_BYTES_PER_EVENT, events_for_bytes};
pub use params::{BoundaryParams, ComputeParams};
pub use results::{CompareResult, CostResult, Regime, SweepRow};
