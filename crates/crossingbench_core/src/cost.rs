//! Closed-form cost model evaluator.
//!
//! Every other procedure in the crate is a loop over [`evaluate`].

use crate::error::{CrossingError, Result};
use crate::model::{BoundaryParams, ComputeParams, CostInputs, CostResult};

/// Intra-domain compute energy in pJ
#[must_use]
pub fn energy_intra(bytes_compute: u64, compute: &ComputeParams) -> f64 {
    bytes_compute as f64 * compute.pj_per_byte
}

/// Boundary crossing energy in pJ
#[must_use]
pub fn energy_cross(bytes_cross: u64, events_cross: u64, boundary: &BoundaryParams) -> f64 {
    events_cross as f64 * boundary.alpha_pj_per_event + bytes_cross as f64 * boundary.beta_pj_per_byte
}

/// Evaluate the cost model at one operating point.
///
/// Fails with `InvalidParameter` if any coefficient is negative or non-finite,
/// or if the energy itself overflows `f64`. Counts are unsigned, so negative
/// byte/event counts are rejected earlier by [`CostInputs::from_signed`].
pub fn evaluate(
    compute: &ComputeParams,
    boundary: &BoundaryParams,
    inputs: &CostInputs,
) -> Result<CostResult> {
    compute.validate()?;
    boundary.validate()?;

    let c_intra = energy_intra(inputs.bytes_compute, compute);
    let c_cross = energy_cross(inputs.bytes_cross, inputs.events_cross, boundary);
    let c_total = c_intra + c_cross;
    if !c_total.is_finite() {
        return Err(CrossingError::InvalidParameter {
            name: "c_total_pj",
            value: c_total,
            reason: "energy overflows f64 for these coefficients and counts",
        });
    }
    Ok(CostResult::from_components(c_intra, c_cross))
}

/// Elasticity `d log(y) / d log(x)` between two points.
///
/// Returns `None` when either coordinate is non-positive or `x1 == x2`.
#[must_use]
pub fn log_slope(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<f64> {
    if x1 <= 0.0 || x2 <= 0.0 || y1 <= 0.0 || y2 <= 0.0 || x1 == x2 {
        return None;
    }
    Some((y2.ln() - y1.ln()) / (x2.ln() - x1.ln()))
}
