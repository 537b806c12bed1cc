//! Domain-crossing energy model library
//!
//! This crate provides a closed-form analytic cost model for heterogeneous
//! compute systems. Total energy is split into:
//! - Intra-domain compute energy (`pj_per_byte × bytes_compute`)
//! - Domain-crossing energy (`α × events + β × bytes_cross`)
//!
//! On top of the single-point evaluator it offers:
//! - Log-spaced sweeps of crossing volume with local elasticity estimates
//! - Baseline vs. crossing-reduced comparisons
//! - A default parameter registry for common boundaries and substrates
//!
//! # Example
//!
//! ```ignore
//! use crossingbench_core::{ParameterRegistry, SweepConfig, sweep};
//!
//! let registry = ParameterRegistry::default();
//! let boundary = registry.boundary("analog")?;
//! let compute = registry.compute("analog")?;
//!
//! let rows = sweep(&compute, &boundary, &SweepConfig::default())?;
//! for row in &rows {
//!     println!("{} {:?}", row.bytes_cross, row.epsilon_local);
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod cost;
pub mod error;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{CompareConfig, SweepConfig, SweepSummary, compare, sweep};
pub use config::{ParamOverrides, ParameterRegistry};
pub use cost::evaluate;
pub use error::{CrossingError, Result};
pub use model::{
    BoundaryParams, CompareResult, ComputeParams, CostInputs, CostResult, Regime, SweepRow,
};
