use std::fmt;

use serde::{Deserialize, Serialize};

use super::CostInputs;

/// Decomposed energy of one operating point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    pub c_intra_pj: f64,
    pub c_cross_pj: f64,
    pub c_total_pj: f64,
    /// Share of total energy spent crossing, in [0, 1]
    pub crossing_fraction: f64,
}

impl CostResult {
    /// Assemble a result from its two components.
    ///
    /// A zero total yields a crossing fraction of 0.
    #[must_use]
    pub(crate) fn from_components(c_intra_pj: f64, c_cross_pj: f64) -> Self {
        let c_total_pj = c_intra_pj + c_cross_pj;
        let crossing_fraction = if c_total_pj > 0.0 {
            c_cross_pj / c_total_pj
        } else {
            0.0
        };
        Self {
            c_intra_pj,
            c_cross_pj,
            c_total_pj,
            crossing_fraction,
        }
    }

    #[must_use]
    pub fn regime(&self) -> Regime {
        Regime::classify(self.crossing_fraction)
    }
}

/// Which cost component dominates an operating point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Crossing fraction at or below 0.3
    ComputeDominated,
    /// Crossing fraction in (0.3, 0.7]
    Transition,
    /// Crossing fraction above 0.7
    CrossingDominated,
}

impl Regime {
    pub const TRANSITION_THRESHOLD: f64 = 0.3;
    pub const CROSSING_THRESHOLD: f64 = 0.7;

    #[must_use]
    pub fn classify(crossing_fraction: f64) -> Self {
        if crossing_fraction > Self::CROSSING_THRESHOLD {
            Regime::CrossingDominated
        } else if crossing_fraction > Self::TRANSITION_THRESHOLD {
            Regime::Transition
        } else {
            Regime::ComputeDominated
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::ComputeDominated => write!(f, "compute-dominated"),
            Regime::Transition => write!(f, "transition"),
            Regime::CrossingDominated => write!(f, "crossing-dominated"),
        }
    }
}

/// One sample of a crossing-volume sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub bytes_compute: u64,
    pub bytes_cross: u64,
    pub events_cross: u64,
    #[serde(flatten)]
    pub cost: CostResult,
    /// Local elasticity ∂log C / ∂log V_b; `None` where the derivative is undefined
    pub epsilon_local: Option<f64>,
}

/// Baseline vs. crossing-reduced comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompareResult {
    pub reduce_factor: f64,
    pub baseline_inputs: CostInputs,
    pub baseline: CostResult,
    pub reduced_inputs: CostInputs,
    pub reduced: CostResult,
    /// `(baseline − reduced) / baseline`, 0 for a zero baseline
    pub energy_gain_fraction: f64,
    /// `baseline / reduced`; `None` when the reduced total is 0
    pub energy_gain_x: Option<f64>,
    /// Discrete elasticity between the two operating points
    pub effective_elasticity: Option<f64>,
}
