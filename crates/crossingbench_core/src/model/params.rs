//! Cost coefficients for boundaries and compute substrates.

use serde::{Deserialize, Serialize};

use crate::error::{CrossingError, Result};

/// Crossing cost of a domain boundary.
///
/// `C_cross = alpha_pj_per_event × events + beta_pj_per_byte × bytes`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryParams {
    /// β: energy per byte moved across the boundary (pJ)
    pub beta_pj_per_byte: f64,
    /// α: fixed energy per crossing event (pJ)
    #[serde(default)]
    pub alpha_pj_per_event: f64,
}

impl BoundaryParams {
    /// Boundary with a per-byte cost only (α = 0)
    #[must_use]
    pub const fn per_byte(beta_pj_per_byte: f64) -> Self {
        Self {
            beta_pj_per_byte,
            alpha_pj_per_event: 0.0,
        }
    }

    /// Create validated boundary parameters
    pub fn new(beta_pj_per_byte: f64, alpha_pj_per_event: f64) -> Result<Self> {
        let params = Self {
            beta_pj_per_byte,
            alpha_pj_per_event,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check that both coefficients are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        check_coefficient("beta_pj_per_byte", self.beta_pj_per_byte)?;
        check_coefficient("alpha_pj_per_event", self.alpha_pj_per_event)
    }
}

/// Intra-domain compute cost of a substrate.
///
/// `C_intra = pj_per_byte × bytes_compute`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputeParams {
    pub pj_per_byte: f64,
}

impl ComputeParams {
    #[must_use]
    pub const fn per_byte(pj_per_byte: f64) -> Self {
        Self { pj_per_byte }
    }

    /// Create validated compute parameters
    pub fn new(pj_per_byte: f64) -> Result<Self> {
        let params = Self { pj_per_byte };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        check_coefficient("pj_per_byte", self.pj_per_byte)
    }
}

fn check_coefficient(name: &'static str, value: f64) -> Result<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(CrossingError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(CrossingError::negative(name, value));
    }
    Ok(())
}
