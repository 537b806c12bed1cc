//! Scenario tests for the crossing cost model
//!
//! Tests are organized by topic:
//! - `cost_model` - Single-point evaluation invariants and reference values
//! - `sweeps` - Sweep shape, ordering, and elasticity trends
//! - `comparisons` - Baseline vs. reduced scenarios


use crate::config::ParameterRegistry;
use crate::model::{BoundaryParams, ComputeParams};

/// Resolve a (compute, boundary) pair from the built-in registry
fn defaults(compute: &str, boundary: &str) -> (ComputeParams, BoundaryParams) {
    let registry = ParameterRegistry::default();
    (
        registry.compute(compute).unwrap(),
        registry.boundary(boundary).unwrap(),
    )
}
