use serde::{Deserialize, Serialize};

use crate::model::{Regime, SweepRow};

/// Ranges observed over a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    pub rows: usize,
    pub crossing_fraction_min: f64,
    pub crossing_fraction_max: f64,
    /// Smallest defined elasticity; `None` if no row has one
    pub epsilon_local_min: Option<f64>,
    pub epsilon_local_max: Option<f64>,
    /// Regime at the lowest crossing volume
    pub regime_low: Option<Regime>,
    /// Regime at the highest crossing volume
    pub regime_high: Option<Regime>,
}

impl SweepSummary {
    #[must_use]
    pub fn from_rows(rows: &[SweepRow]) -> Self {
        let fractions = rows.iter().map(|r| r.cost.crossing_fraction);
        let epsilons: Vec<f64> = rows.iter().filter_map(|r| r.epsilon_local).collect();

        Self {
            rows: rows.len(),
            crossing_fraction_min: fractions.clone().reduce(f64::min).unwrap_or(0.0),
            crossing_fraction_max: fractions.reduce(f64::max).unwrap_or(0.0),
            epsilon_local_min: epsilons.iter().copied().reduce(f64::min),
            epsilon_local_max: epsilons.iter().copied().reduce(f64::max),
            regime_low: rows.first().map(|r| r.cost.regime()),
            regime_high: rows.last().map(|r| r.cost.regime()),
        }
    }
}
