use serde::{Deserialize, Serialize};

use crate::model::{BoundaryParams, ComputeParams};

/// Explicit coefficient values that replace registry entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamOverrides {
    /// β override (pJ/byte)
    pub beta: Option<f64>,
    /// α override (pJ/event)
    pub alpha: Option<f64>,
    /// Compute cost override (pJ/byte)
    pub compute_pj_per_byte: Option<f64>,
}

impl ParamOverrides {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beta.is_none() && self.alpha.is_none() && self.compute_pj_per_byte.is_none()
    }

    /// Replace whichever boundary coefficients are overridden
    #[must_use]
    pub fn apply_boundary(&self, base: BoundaryParams) -> BoundaryParams {
        BoundaryParams {
            beta_pj_per_byte: self.beta.unwrap_or(base.beta_pj_per_byte),
            alpha_pj_per_event: self.alpha.unwrap_or(base.alpha_pj_per_event),
        }
    }

    #[must_use]
    pub fn apply_compute(&self, base: ComputeParams) -> ComputeParams {
        ComputeParams {
            pj_per_byte: self.compute_pj_per_byte.unwrap_or(base.pj_per_byte),
        }
    }
}
