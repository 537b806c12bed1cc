//! Log-spaced crossing-volume sweep.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cost::evaluate;
use crate::error::{CrossingError, Result};
use crate::model::{
    BoundaryParams, ComputeParams, CostInputs, CostResult, DEFAULT_BYTES_PER_EVENT, SweepRow,
    events_for_bytes,
};

use super::local_elasticities;

/// Inputs for a crossing-volume sweep.
///
/// Counts are signed so that values taken straight from a command line can
/// be rejected with a typed error instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Intra-domain compute bytes (held fixed)
    pub bytes_compute: i64,
    /// Lowest crossing volume, inclusive
    pub cross_min: i64,
    /// Highest crossing volume, inclusive
    pub cross_max: i64,
    /// Number of samples, at least 2
    pub steps: usize,
    /// Bytes amortized per crossing event
    #[serde(default = "default_bytes_per_event")]
    pub bytes_per_event: u64,
}

fn default_bytes_per_event() -> u64 {
    DEFAULT_BYTES_PER_EVENT
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            bytes_compute: 262_144,
            cross_min: 256,
            cross_max: 524_288,
            steps: 12,
            bytes_per_event: DEFAULT_BYTES_PER_EVENT,
        }
    }
}

impl SweepConfig {
    fn range_error(&self, reason: &'static str) -> CrossingError {
        CrossingError::InvalidRange {
            cross_min: self.cross_min,
            cross_max: self.cross_max,
            steps: self.steps,
            reason,
        }
    }

    /// Check range and counts, returning `(bytes_compute, cross_min, cross_max)`
    pub fn validate(&self) -> Result<(u64, u64, u64)> {
        if self.steps < 2 {
            return Err(self.range_error("steps must be >= 2"));
        }
        if self.cross_min < 0 {
            return Err(self.range_error("cross_min must be >= 0"));
        }
        if self.cross_min > self.cross_max {
            return Err(self.range_error("cross_min must not exceed cross_max"));
        }
        // Equal bounds repeat one volume; otherwise every sample is a distinct byte count
        let distinct = self.cross_max.abs_diff(self.cross_min).saturating_add(1);
        let steps = u64::try_from(self.steps).unwrap_or(u64::MAX);
        if self.cross_min != self.cross_max && steps > distinct {
            return Err(self.range_error("steps exceed the whole byte counts in range"));
        }
        let bytes_compute = u64::try_from(self.bytes_compute)
            .map_err(|_| CrossingError::negative("bytes_compute", self.bytes_compute as f64))?;
        // Surfaces a zero divisor before any sample is evaluated
        events_for_bytes(0, self.bytes_per_event)?;

        Ok((bytes_compute, self.cross_min as u64, self.cross_max as u64))
    }
}

/// Generate `steps` crossing volumes between `cross_min` and `cross_max`.
///
/// Samples are log-spaced and rounded to whole bytes; the end points are
/// exact. A zero lower bound becomes a leading zero sample followed by
/// `steps - 1` samples `round(cross_max^(k / (steps - 1)))` for
/// `k = 1..steps`, i.e. log-spaced over `(1, cross_max]`.
///
/// Rounded samples that collide are nudged apart by whole bytes, so the
/// result is strictly increasing whenever `steps` does not exceed the number
/// of byte counts in the range ([`SweepConfig::validate`] enforces this).
#[must_use]
pub fn crossing_volumes(cross_min: u64, cross_max: u64, steps: usize) -> Vec<u64> {
    if cross_max == 0 {
        return vec![0; steps];
    }
    if cross_min > 0 {
        return log_space(cross_min, cross_max, steps);
    }

    // The grid point at 1 (log 0) is where the zero sample sits
    let mut volumes = log_space(1, cross_max, steps);
    if let Some(first) = volumes.first_mut() {
        *first = 0;
    }
    separate(&mut volumes);
    volumes
}

fn log_space(lo: u64, hi: u64, n: usize) -> Vec<u64> {
    match n {
        0 => return Vec::new(),
        1 => return vec![hi],
        _ => {}
    }

    let log_lo = (lo as f64).ln();
    let log_hi = (hi as f64).ln();
    let last = n - 1;

    let mut volumes: Vec<u64> = (0..n)
        .map(|i| {
            if i == 0 {
                lo
            } else if i == last {
                hi
            } else {
                let t = i as f64 / last as f64;
                let v = (log_lo + t * (log_hi - log_lo)).exp().round() as u64;
                v.clamp(lo, hi)
            }
        })
        .collect();
    if lo < hi {
        separate(&mut volumes);
    }
    volumes
}

/// Make a sorted sample strictly increasing without moving its end points.
///
/// A forward pass lifts each duplicate one byte above its predecessor, then
/// a backward pass pulls anything that overran the last sample back down.
fn separate(volumes: &mut [u64]) {
    for i in 1..volumes.len().saturating_sub(1) {
        volumes[i] = volumes[i].max(volumes[i - 1].saturating_add(1));
    }
    for i in (1..volumes.len().saturating_sub(1)).rev() {
        volumes[i] = volumes[i].min(volumes[i + 1].saturating_sub(1));
    }
}

/// Sweep crossing volume and estimate local elasticity at each sample.
///
/// Rows are ordered by ascending crossing volume. With the `parallel`
/// feature the samples are evaluated on the rayon pool; ordering is the same.
pub fn sweep(
    compute: &ComputeParams,
    boundary: &BoundaryParams,
    config: &SweepConfig,
) -> Result<Vec<SweepRow>> {
    let (bytes_compute, cross_min, cross_max) = config.validate()?;
    compute.validate()?;
    boundary.validate()?;

    let volumes = crossing_volumes(cross_min, cross_max, config.steps);

    let point = |&bytes_cross: &u64| -> Result<(CostInputs, CostResult)> {
        let inputs =
            CostInputs::with_derived_events(bytes_compute, bytes_cross, config.bytes_per_event)?;
        let cost = evaluate(compute, boundary, &inputs)?;
        Ok((inputs, cost))
    };

    #[cfg(feature = "parallel")]
    let points: Result<Vec<_>> = volumes.par_iter().map(point).collect();

    #[cfg(not(feature = "parallel"))]
    let points: Result<Vec<_>> = volumes.iter().map(point).collect();

    let points = points?;

    let totals: Vec<f64> = points.iter().map(|(_, cost)| cost.c_total_pj).collect();
    let epsilons = local_elasticities(&volumes, &totals);

    Ok(points
        .into_iter()
        .zip(epsilons)
        .map(|((inputs, cost), epsilon_local)| SweepRow {
            bytes_compute: inputs.bytes_compute,
            bytes_cross: inputs.bytes_cross,
            events_cross: inputs.events_cross,
            cost,
            epsilon_local,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volumes_hit_end_points() {
        let v = crossing_volumes(256, 524_288, 12);
        assert_eq!(v.len(), 12);
        assert_eq!(v[0], 256);
        assert_eq!(v[11], 524_288);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_volumes_are_geometric() {
        // 1, 10, 100, 1000
        assert_eq!(crossing_volumes(1, 1000, 4), vec![1, 10, 100, 1000]);
    }

    #[test]
    fn test_zero_lower_bound_keeps_step_count() {
        // 1000^(k/4) for k = 1..4
        let v = crossing_volumes(0, 1000, 5);
        assert_eq!(v, vec![0, 6, 32, 178, 1000]);

        assert_eq!(crossing_volumes(0, 1000, 2), vec![0, 1000]);
        assert_eq!(crossing_volumes(0, 0, 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_zero_lower_bound_never_samples_one() {
        // 100^(k/2): the first sample after zero is 10, not 1
        assert_eq!(crossing_volumes(0, 100, 3), vec![0, 10, 100]);
    }

    #[test]
    fn test_narrow_range_stays_strictly_increasing() {
        // Plain rounding gives 1, 1, 2, 2, 3, 4, 5, 6, 8, 10
        let v = crossing_volumes(1, 10, 10);
        assert_eq!(v, (1..=10).collect::<Vec<u64>>());

        let v = crossing_volumes(0, 5, 6);
        assert_eq!(v, vec![0, 1, 2, 3, 4, 5]);

        let v = crossing_volumes(100, 140, 30);
        assert_eq!(v.len(), 30);
        assert_eq!((v[0], v[29]), (100, 140));
        assert!(v.windows(2).all(|w| w[1] > w[0]), "{v:?}");
    }

    #[test]
    fn test_validate_rejects_more_steps_than_byte_counts() {
        let base = SweepConfig::default();
        let too_many = SweepConfig {
            cross_min: 1,
            cross_max: 10,
            steps: 12,
            ..base
        };
        assert!(matches!(
            too_many.validate(),
            Err(CrossingError::InvalidRange { steps: 12, .. })
        ));

        let exact = SweepConfig {
            steps: 10,
            ..too_many
        };
        assert!(exact.validate().is_ok());

        let equal_bounds = SweepConfig {
            cross_min: 1000,
            cross_max: 1000,
            steps: 5,
            ..base
        };
        assert!(equal_bounds.validate().is_ok());
    }

    #[test]
    fn test_equal_bounds() {
        assert_eq!(crossing_volumes(1000, 1000, 3), vec![1000, 1000, 1000]);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let base = SweepConfig::default();
        for config in [
            SweepConfig { steps: 1, ..base },
            SweepConfig { cross_min: -1, ..base },
            SweepConfig {
                cross_min: 1000,
                cross_max: 10,
                ..base
            },
        ] {
            assert!(matches!(
                config.validate(),
                Err(CrossingError::InvalidRange { .. })
            ));
        }
    }

    #[test]
    fn test_validate_rejects_bad_counts() {
        let base = SweepConfig::default();
        assert!(matches!(
            SweepConfig {
                bytes_compute: -5,
                ..base
            }
            .validate(),
            Err(CrossingError::InvalidParameter {
                name: "bytes_compute",
                ..
            })
        ));
        assert!(matches!(
            SweepConfig {
                bytes_per_event: 0,
                ..base
            }
            .validate(),
            Err(CrossingError::InvalidParameter {
                name: "bytes_per_event",
                ..
            })
        ));
    }
}
