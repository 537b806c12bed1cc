//! Finite-difference elasticity estimates in log space.

use crate::cost::log_slope;

/// Estimate `∂log C / ∂log V` at every sample of a sweep.
///
/// Interior samples use a centered difference against both neighbours; the
/// first and last samples use their single neighbour. A neighbour with zero
/// volume cannot be logged, so the sample itself stands in for it. Samples
/// with zero volume, or pairs that collapse to one volume, yield `None`.
#[must_use]
pub fn local_elasticities(volumes: &[u64], totals: &[f64]) -> Vec<Option<f64>> {
    debug_assert_eq!(volumes.len(), totals.len());
    let n = volumes.len();

    (0..n)
        .map(|i| {
            if volumes[i] == 0 {
                return None;
            }
            let lo = if i > 0 && volumes[i - 1] > 0 { i - 1 } else { i };
            let hi = if i + 1 < n { i + 1 } else { i };
            if lo == hi {
                return None;
            }
            log_slope(
                volumes[lo] as f64,
                totals[lo],
                volumes[hi] as f64,
                totals[hi],
            )
        })
        .collect()
}
