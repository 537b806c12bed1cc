use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use crossingbench_core::ParamOverrides;
use crossingbench_core::analysis::{CompareConfig, SweepConfig};
use crossingbench_core::model::DEFAULT_BYTES_PER_EVENT;

#[derive(Parser, Debug)]
#[command(name = "crossingbench")]
#[command(about = "Domain crossing energy model: sweeps and baseline/reduced comparisons")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// YAML file with extra or replacement boundary/compute parameters
    #[arg(long, global = true)]
    pub params: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log-sweep crossing bytes and estimate local epsilon
    Sweep(SweepArgs),
    /// Compare baseline vs reduced crossing volume
    Compare(CompareArgs),
    /// Evaluate a single operating point
    Point(PointArgs),
    /// Print the effective parameter registry as YAML
    Params,
}

/// Boundary/compute selection shared by every evaluating command
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Boundary identifier (analog, memory, chiplet, hbm, voltage, or from --params)
    #[arg(long, default_value = "analog")]
    pub boundary: String,

    /// Compute substrate identifier (analog, digital, lowv, or from --params)
    #[arg(long, default_value = "digital")]
    pub compute: String,

    /// Override beta (pJ/byte)
    #[arg(long, allow_negative_numbers = true)]
    pub beta: Option<f64>,

    /// Override alpha (pJ/event)
    #[arg(long, allow_negative_numbers = true)]
    pub alpha: Option<f64>,

    /// Override compute cost (pJ/byte)
    #[arg(long, alias = "compute_pj_per_byte", allow_negative_numbers = true)]
    pub compute_pj_per_byte: Option<f64>,

    /// Bytes amortized per crossing event
    #[arg(
        long,
        alias = "bytes_per_event",
        default_value_t = DEFAULT_BYTES_PER_EVENT,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub bytes_per_event: u64,
}

impl CommonArgs {
    pub fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            beta: self.beta,
            alpha: self.alpha,
            compute_pj_per_byte: self.compute_pj_per_byte,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Intra-domain compute bytes
    #[arg(long, default_value_t = 262_144, allow_negative_numbers = true)]
    pub bytes: i64,

    #[arg(long, alias = "cross_min", default_value_t = 256, allow_negative_numbers = true)]
    pub cross_min: i64,

    #[arg(long, alias = "cross_max", default_value_t = 524_288, allow_negative_numbers = true)]
    pub cross_max: i64,

    #[arg(long, default_value_t = 12)]
    pub steps: usize,

    /// CSV output path
    #[arg(long, default_value = "sweep.csv")]
    pub out: PathBuf,

    /// Optional JSON summary output path
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl SweepArgs {
    pub fn config(&self) -> SweepConfig {
        SweepConfig {
            bytes_compute: self.bytes,
            cross_min: self.cross_min,
            cross_max: self.cross_max,
            steps: self.steps,
            bytes_per_event: self.common.bytes_per_event,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Intra-domain compute bytes
    #[arg(long, default_value_t = 262_144, allow_negative_numbers = true)]
    pub bytes: i64,

    #[arg(long, alias = "cross_bytes", default_value_t = 196_608, allow_negative_numbers = true)]
    pub cross_bytes: i64,

    #[arg(long, alias = "reduce_factor", default_value_t = 3.0, allow_negative_numbers = true)]
    pub reduce_factor: f64,

    /// Optional JSON output path
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl CompareArgs {
    pub fn config(&self) -> CompareConfig {
        CompareConfig {
            bytes_compute: self.bytes,
            cross_bytes: self.cross_bytes,
            reduce_factor: self.reduce_factor,
            bytes_per_event: self.common.bytes_per_event,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PointArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Intra-domain compute bytes
    #[arg(long, default_value_t = 262_144, allow_negative_numbers = true)]
    pub bytes: i64,

    #[arg(long, alias = "cross_bytes", default_value_t = 262_144, allow_negative_numbers = true)]
    pub cross_bytes: i64,

    /// Crossing events (default: derived from --bytes-per-event)
    #[arg(long, allow_negative_numbers = true)]
    pub events: Option<i64>,
}
