//! Baseline vs. crossing-reduced comparison.

use serde::{Deserialize, Serialize};

use crate::cost::{evaluate, log_slope};
use crate::error::{CrossingError, Result};
use crate::model::{
    BoundaryParams, CompareResult, ComputeParams, CostInputs, DEFAULT_BYTES_PER_EVENT,
};

/// Inputs for a baseline/reduced comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    pub bytes_compute: i64,
    /// Baseline crossing volume
    pub cross_bytes: i64,
    /// Divisor applied to the baseline crossing volume, must be > 0
    pub reduce_factor: f64,
    #[serde(default = "default_bytes_per_event")]
    pub bytes_per_event: u64,
}

fn default_bytes_per_event() -> u64 {
    DEFAULT_BYTES_PER_EVENT
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            bytes_compute: 262_144,
            cross_bytes: 196_608,
            reduce_factor: 3.0,
            bytes_per_event: DEFAULT_BYTES_PER_EVENT,
        }
    }
}

/// Crossing volume after dividing by `reduce_factor`, rounded to whole bytes.
///
/// A factor small enough to push the volume past `u64::MAX` is rejected.
fn reduced_volume(cross_bytes: u64, reduce_factor: f64) -> Result<u64> {
    let volume = (cross_bytes as f64 / reduce_factor).round();
    // u64::MAX rounds up to 2^64 as f64, so anything at or above it overflows
    if volume >= u64::MAX as f64 {
        return Err(CrossingError::InvalidParameter {
            name: "reduce_factor",
            value: reduce_factor,
            reason: "reduced crossing volume exceeds u64::MAX bytes",
        });
    }
    Ok(volume as u64)
}

/// Evaluate the baseline and the crossing-reduced workload.
///
/// `energy_gain_fraction` is the share of baseline energy saved. The
/// effective elasticity is the log-log slope between the two operating
/// points and is `None` when it has no finite value (zero totals, zero
/// volumes, or a factor of 1).
pub fn compare(
    compute: &ComputeParams,
    boundary: &BoundaryParams,
    config: &CompareConfig,
) -> Result<CompareResult> {
    let reduce_factor = config.reduce_factor;
    if !reduce_factor.is_finite() || reduce_factor <= 0.0 {
        return Err(CrossingError::InvalidParameter {
            name: "reduce_factor",
            value: reduce_factor,
            reason: "must be a finite value greater than zero",
        });
    }

    let baseline_inputs = CostInputs::from_signed(
        config.bytes_compute,
        config.cross_bytes,
        None,
        config.bytes_per_event,
    )?;
    let reduced_inputs = CostInputs::with_derived_events(
        baseline_inputs.bytes_compute,
        reduced_volume(baseline_inputs.bytes_cross, reduce_factor)?,
        config.bytes_per_event,
    )?;

    let baseline = evaluate(compute, boundary, &baseline_inputs)?;
    let reduced = evaluate(compute, boundary, &reduced_inputs)?;

    let energy_gain_fraction = if baseline.c_total_pj > 0.0 {
        (baseline.c_total_pj - reduced.c_total_pj) / baseline.c_total_pj
    } else {
        0.0
    };
    let energy_gain_x =
        (reduced.c_total_pj > 0.0).then(|| baseline.c_total_pj / reduced.c_total_pj);

    let effective_elasticity = log_slope(
        reduced_inputs.bytes_cross as f64,
        reduced.c_total_pj,
        baseline_inputs.bytes_cross as f64,
        baseline.c_total_pj,
    );

    Ok(CompareResult {
        reduce_factor,
        baseline_inputs,
        baseline,
        reduced_inputs,
        reduced,
        energy_gain_fraction,
        energy_gain_x,
        effective_elasticity,
    })
}
