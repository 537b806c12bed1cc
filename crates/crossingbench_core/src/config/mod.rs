//! Parameter registry
//!
//! `ParameterRegistry` maps boundary and compute identifiers to their cost
//! coefficients. It is plain data: callers build or load one and pass it to
//! the resolution step, so tests can swap in arbitrary parameter sets.
//!
//! ```ignore
//! use crossingbench_core::{ParameterRegistry, ParamOverrides};
//!
//! let registry = ParameterRegistry::default()
//!     .with_boundary("optical", BoundaryParams::per_byte(0.4));
//!
//! let overrides = ParamOverrides { beta: Some(2.0), ..Default::default() };
//! let (compute, boundary) = registry.resolve("digital", "optical", &overrides)?;
//! ```

mod overrides;

pub use overrides::ParamOverrides;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CrossingError, Result};
use crate::model::{BoundaryParams, ComputeParams};

/// Built-in boundary coefficients (β in pJ/byte, α = 0)
pub const DEFAULT_BOUNDARIES: [(&str, BoundaryParams); 5] = [
    ("analog", BoundaryParams::per_byte(3.20)),
    ("memory", BoundaryParams::per_byte(1.25)),
    ("chiplet", BoundaryParams::per_byte(5.00)),
    ("hbm", BoundaryParams::per_byte(10.0)),
    ("voltage", BoundaryParams::per_byte(0.80)),
];

/// Built-in compute substrates (pJ/byte)
pub const DEFAULT_COMPUTE: [(&str, ComputeParams); 3] = [
    ("analog", ComputeParams::per_byte(0.0001)),
    ("digital", ComputeParams::per_byte(0.25)),
    ("lowv", ComputeParams::per_byte(0.05)),
];

/// Identifier → coefficient tables for boundaries and compute substrates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRegistry {
    #[serde(default)]
    pub boundaries: BTreeMap<String, BoundaryParams>,
    #[serde(default)]
    pub compute: BTreeMap<String, ComputeParams>,
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self {
            boundaries: DEFAULT_BOUNDARIES
                .iter()
                .map(|(id, params)| ((*id).to_string(), *params))
                .collect(),
            compute: DEFAULT_COMPUTE
                .iter()
                .map(|(id, params)| ((*id).to_string(), *params))
                .collect(),
        }
    }
}

impl ParameterRegistry {
    /// A registry with no entries
    #[must_use]
    pub fn empty() -> Self {
        Self {
            boundaries: BTreeMap::new(),
            compute: BTreeMap::new(),
        }
    }

    /// Add or replace a boundary entry
    #[must_use]
    pub fn with_boundary(mut self, id: impl Into<String>, params: BoundaryParams) -> Self {
        self.boundaries.insert(id.into(), params);
        self
    }

    /// Add or replace a compute entry
    #[must_use]
    pub fn with_compute(mut self, id: impl Into<String>, params: ComputeParams) -> Self {
        self.compute.insert(id.into(), params);
        self
    }

    /// Layer `other` on top of `self`; entries in `other` win
    #[must_use]
    pub fn merged(mut self, other: ParameterRegistry) -> Self {
        self.boundaries.extend(other.boundaries);
        self.compute.extend(other.compute);
        self
    }

    pub fn boundary(&self, id: &str) -> Result<BoundaryParams> {
        self.boundaries
            .get(id)
            .copied()
            .ok_or_else(|| CrossingError::UnknownBoundary {
                id: id.to_string(),
                known: self.boundary_ids().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn compute(&self, id: &str) -> Result<ComputeParams> {
        self.compute
            .get(id)
            .copied()
            .ok_or_else(|| CrossingError::UnknownCompute {
                id: id.to_string(),
                known: self.compute_ids().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn boundary_ids(&self) -> impl Iterator<Item = &str> {
        self.boundaries.keys().map(String::as_str)
    }

    pub fn compute_ids(&self) -> impl Iterator<Item = &str> {
        self.compute.keys().map(String::as_str)
    }

    /// Check every entry's coefficients
    pub fn validate(&self) -> Result<()> {
        for params in self.boundaries.values() {
            params.validate()?;
        }
        for params in self.compute.values() {
            params.validate()?;
        }
        Ok(())
    }

    /// Look up both identifiers and apply explicit overrides.
    ///
    /// The returned parameters are validated.
    pub fn resolve(
        &self,
        compute_id: &str,
        boundary_id: &str,
        overrides: &ParamOverrides,
    ) -> Result<(ComputeParams, BoundaryParams)> {
        let compute = overrides.apply_compute(self.compute(compute_id)?);
        let boundary = overrides.apply_boundary(self.boundary(boundary_id)?);
        compute.validate()?;
        boundary.validate()?;
        Ok((compute, boundary))
    }
}
