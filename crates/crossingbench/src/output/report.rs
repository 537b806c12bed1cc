//! Serializable reports and their console rendering.

use std::io::{self, Write};

use crossingbench_core::{
    BoundaryParams, CompareResult, ComputeParams, CostInputs, CostResult, Regime, SweepConfig,
    SweepSummary,
};
use serde::Serialize;

/// Which boundary/compute pair a report was produced with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelIdentity {
    pub boundary: String,
    pub compute: String,
    pub alpha_pj_per_event: f64,
    pub beta_pj_per_byte: f64,
    pub compute_pj_per_byte: f64,
}

impl ModelIdentity {
    pub fn new(
        boundary_id: &str,
        compute_id: &str,
        boundary: &BoundaryParams,
        compute: &ComputeParams,
    ) -> Self {
        Self {
            boundary: boundary_id.to_string(),
            compute: compute_id.to_string(),
            alpha_pj_per_event: boundary.alpha_pj_per_event,
            beta_pj_per_byte: boundary.beta_pj_per_byte,
            compute_pj_per_byte: compute.pj_per_byte,
        }
    }

    fn write_console(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            " Boundary={} Compute={} alpha={} beta={} compute={}",
            self.boundary,
            self.compute,
            self.alpha_pj_per_event,
            self.beta_pj_per_byte,
            self.compute_pj_per_byte
        )
    }
}

/// `{value:.precision$}` or `undefined`
pub fn format_optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| format!("{v:.precision$}"))
}

/// Sweep summary as written by `sweep --json`
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    #[serde(flatten)]
    pub model: ModelIdentity,
    pub bytes_compute: i64,
    pub cross_min: i64,
    pub cross_max: i64,
    pub steps: usize,
    pub bytes_per_event: u64,
    #[serde(flatten)]
    pub summary: SweepSummary,
}

impl SweepReport {
    pub fn new(model: ModelIdentity, config: &SweepConfig, summary: SweepSummary) -> Self {
        Self {
            model,
            bytes_compute: config.bytes_compute,
            cross_min: config.cross_min,
            cross_max: config.cross_max,
            steps: config.steps,
            bytes_per_event: config.bytes_per_event,
            summary,
        }
    }

    pub fn write_console(&self, out: &mut impl Write) -> io::Result<()> {
        self.model.write_console(out)?;
        writeln!(
            out,
            "Crossing fraction range: {:.3} .. {:.3}",
            self.summary.crossing_fraction_min, self.summary.crossing_fraction_max
        )?;
        if let (Some(min), Some(max)) = (
            self.summary.epsilon_local_min,
            self.summary.epsilon_local_max,
        ) {
            writeln!(out, "Epsilon local range:     {min:.3} .. {max:.3}")?;
        }
        if let (Some(low), Some(high)) = (self.summary.regime_low, self.summary.regime_high) {
            writeln!(out, "Regime:                  {low} -> {high}")?;
        }
        Ok(())
    }
}

/// Baseline vs. reduced comparison as written by `compare --json`
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    #[serde(flatten)]
    pub model: ModelIdentity,
    pub baseline_total_pj: f64,
    pub baseline_intra_pj: f64,
    pub baseline_cross_pj: f64,
    pub baseline_cross_frac: f64,
    pub baseline_cross_bytes: u64,
    pub baseline_events: u64,
    pub reduced_total_pj: f64,
    pub reduced_intra_pj: f64,
    pub reduced_cross_pj: f64,
    pub reduced_cross_frac: f64,
    pub reduced_cross_bytes: u64,
    pub reduced_events: u64,
    pub reduce_factor: f64,
    pub energy_gain_fraction: f64,
    pub energy_gain_x: Option<f64>,
    pub elasticity_effective: Option<f64>,
}

impl CompareReport {
    pub fn new(model: ModelIdentity, result: &CompareResult) -> Self {
        Self {
            model,
            baseline_total_pj: result.baseline.c_total_pj,
            baseline_intra_pj: result.baseline.c_intra_pj,
            baseline_cross_pj: result.baseline.c_cross_pj,
            baseline_cross_frac: result.baseline.crossing_fraction,
            baseline_cross_bytes: result.baseline_inputs.bytes_cross,
            baseline_events: result.baseline_inputs.events_cross,
            reduced_total_pj: result.reduced.c_total_pj,
            reduced_intra_pj: result.reduced.c_intra_pj,
            reduced_cross_pj: result.reduced.c_cross_pj,
            reduced_cross_frac: result.reduced.crossing_fraction,
            reduced_cross_bytes: result.reduced_inputs.bytes_cross,
            reduced_events: result.reduced_inputs.events_cross,
            reduce_factor: result.reduce_factor,
            energy_gain_fraction: result.energy_gain_fraction,
            energy_gain_x: result.energy_gain_x,
            elasticity_effective: result.effective_elasticity,
        }
    }

    pub fn write_console(&self, out: &mut impl Write) -> io::Result<()> {
        self.model.write_console(out)?;
        writeln!(out, "baseline_total_pj: {:.6}", self.baseline_total_pj)?;
        writeln!(out, "baseline_cross_frac: {:.6}", self.baseline_cross_frac)?;
        writeln!(out, "reduced_total_pj: {:.6}", self.reduced_total_pj)?;
        writeln!(out, "reduced_cross_frac: {:.6}", self.reduced_cross_frac)?;
        writeln!(out, "energy_gain_fraction: {:.6}", self.energy_gain_fraction)?;
        writeln!(out, "energy_gain_x: {}", format_optional(self.energy_gain_x, 6))?;
        writeln!(
            out,
            "elasticity_effective: {}",
            format_optional(self.elasticity_effective, 6)
        )
    }
}

/// One evaluated operating point
#[derive(Debug, Clone, Serialize)]
pub struct PointReport {
    #[serde(flatten)]
    pub model: ModelIdentity,
    #[serde(flatten)]
    pub inputs: CostInputs,
    #[serde(flatten)]
    pub cost: CostResult,
    pub regime: Regime,
}

impl PointReport {
    pub fn new(model: ModelIdentity, inputs: CostInputs, cost: CostResult) -> Self {
        Self {
            model,
            inputs,
            cost,
            regime: cost.regime(),
        }
    }

    pub fn write_console(&self, out: &mut impl Write) -> io::Result<()> {
        self.model.write_console(out)?;
        writeln!(
            out,
            "bytes_compute={} bytes_cross={} events_cross={}",
            self.inputs.bytes_compute, self.inputs.bytes_cross, self.inputs.events_cross
        )?;
        writeln!(out, "c_intra_pj: {:.6}", self.cost.c_intra_pj)?;
        writeln!(out, "c_cross_pj: {:.6}", self.cost.c_cross_pj)?;
        writeln!(out, "c_total_pj: {:.6}", self.cost.c_total_pj)?;
        writeln!(out, "crossing_fraction: {:.6}", self.cost.crossing_fraction)?;
        writeln!(out, "regime: {}", self.regime)
    }
}
