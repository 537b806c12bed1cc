//! Command dispatch: resolve parameters, call the model, render output.

use std::io::Write;

use color_eyre::eyre::WrapErr;
use crossingbench_core::{
    BoundaryParams, ComputeParams, CostInputs, ParameterRegistry, SweepSummary, compare, evaluate,
    sweep,
};

use crate::cli::{Cli, Command, CommonArgs, CompareArgs, PointArgs, SweepArgs};
use crate::output::{
    CompareReport, ModelIdentity, PointReport, SweepReport, atomic_write, write_sweep_csv,
};
use crate::params_file::{load_registry, registry_to_yaml};

/// Run the parsed command, writing human-readable output to `out`
pub fn run(cli: &Cli, out: &mut impl Write) -> color_eyre::Result<()> {
    let registry = load_registry(cli.params.as_deref())?;

    match &cli.command {
        Command::Sweep(args) => run_sweep(&registry, args, out),
        Command::Compare(args) => run_compare(&registry, args, out),
        Command::Point(args) => run_point(&registry, args, out),
        Command::Params => {
            out.write_all(registry_to_yaml(&registry)?.as_bytes())?;
            Ok(())
        }
    }
}

fn resolve(
    registry: &ParameterRegistry,
    common: &CommonArgs,
) -> color_eyre::Result<(ComputeParams, BoundaryParams, ModelIdentity)> {
    let (compute, boundary) =
        registry.resolve(&common.compute, &common.boundary, &common.overrides())?;
    tracing::debug!(
        boundary = %common.boundary,
        compute = %common.compute,
        beta = boundary.beta_pj_per_byte,
        alpha = boundary.alpha_pj_per_event,
        compute_pj_per_byte = compute.pj_per_byte,
        "Resolved cost parameters"
    );
    let identity = ModelIdentity::new(&common.boundary, &common.compute, &boundary, &compute);
    Ok((compute, boundary, identity))
}

fn write_json(path: &std::path::Path, value: &impl serde::Serialize) -> color_eyre::Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    atomic_write(path, json.as_bytes())
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

fn run_sweep(
    registry: &ParameterRegistry,
    args: &SweepArgs,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    let (compute, boundary, identity) = resolve(registry, &args.common)?;
    let config = args.config();

    let rows = sweep(&compute, &boundary, &config)?;
    tracing::info!(rows = rows.len(), "Sweep complete");

    write_sweep_csv(&args.out, &rows)
        .wrap_err_with(|| format!("Failed to write {}", args.out.display()))?;
    writeln!(out, "Wrote {}", args.out.display())?;

    let report = SweepReport::new(identity, &config, SweepSummary::from_rows(&rows));
    report.write_console(out)?;

    if let Some(path) = &args.json {
        write_json(path, &report)?;
    }
    Ok(())
}

fn run_compare(
    registry: &ParameterRegistry,
    args: &CompareArgs,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    let (compute, boundary, identity) = resolve(registry, &args.common)?;

    let result = compare(&compute, &boundary, &args.config())?;
    let report = CompareReport::new(identity, &result);
    report.write_console(out)?;

    if let Some(path) = &args.json {
        write_json(path, &report)?;
    }
    Ok(())
}

fn run_point(
    registry: &ParameterRegistry,
    args: &PointArgs,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    let (compute, boundary, identity) = resolve(registry, &args.common)?;

    let inputs = CostInputs::from_signed(
        args.bytes,
        args.cross_bytes,
        args.events,
        args.common.bytes_per_event,
    )?;
    let cost = evaluate(&compute, &boundary, &inputs)?;
    PointReport::new(identity, inputs, cost).write_console(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn run_args(args: &[&str]) -> color_eyre::Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut buf = Vec::new();
        run(&cli, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn test_sweep_writes_csv_and_json() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("out").join("sweep.csv");
        let json_path = dir.path().join("summary.json");

        let text = run_args(&[
            "crossingbench",
            "sweep",
            "--boundary",
            "analog",
            "--compute",
            "analog",
            "--out",
            csv_path.to_str().unwrap(),
            "--json",
            json_path.to_str().unwrap(),
        ])
        .unwrap();

        assert!(text.starts_with("Wrote "));
        assert!(text.contains("Crossing fraction range:"));

        let csv = fs::read_to_string(&csv_path).unwrap();
        assert_eq!(csv.lines().count(), 13);

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(summary["boundary"], "analog");
        assert_eq!(summary["steps"], 12);
        assert_eq!(summary["beta_pj_per_byte"], 3.2);
        assert!(summary["epsilon_local_min"].as_f64().unwrap() > 0.95);
        assert_eq!(summary["regime_high"], "crossing_dominated");
    }

    #[test]
    fn test_compare_reference_scenario() {
        let dir = tempdir().unwrap();
        let json_path = dir.path().join("compare.json");

        let text = run_args(&[
            "crossingbench",
            "compare",
            "--boundary",
            "analog",
            "--compute",
            "analog",
            "--json",
            json_path.to_str().unwrap(),
        ])
        .unwrap();
        assert!(text.contains("baseline_total_pj: 629171.814400"));

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(report["reduced_cross_bytes"], 65_536);
        let gain = report["energy_gain_fraction"].as_f64().unwrap();
        assert!((gain - 0.667).abs() < 1e-3);
    }

    #[test]
    fn test_point_with_explicit_events() {
        let text = run_args(&[
            "crossingbench",
            "point",
            "--boundary",
            "chiplet",
            "--alpha",
            "10",
            "--bytes",
            "0",
            "--cross-bytes",
            "100",
            "--events",
            "3",
        ])
        .unwrap();
        assert!(text.contains("events_cross=3"));
        assert!(text.contains("c_cross_pj: 530.000000"));
        assert!(text.contains("regime: crossing-dominated"));
    }

    #[test]
    fn test_params_lists_registry() {
        let text = run_args(&["crossingbench", "params"]).unwrap();
        for id in ["analog", "memory", "chiplet", "hbm", "voltage", "digital", "lowv"] {
            assert!(text.contains(id), "missing {id}");
        }
    }

    #[test]
    fn test_params_file_adds_boundary() {
        let dir = tempdir().unwrap();
        let params = dir.path().join("params.yaml");
        fs::write(&params, "boundaries:\n  optical:\n    beta_pj_per_byte: 0.4\n").unwrap();

        let text = run_args(&[
            "crossingbench",
            "point",
            "--params",
            params.to_str().unwrap(),
            "--boundary",
            "optical",
            "--cross-bytes",
            "1000",
        ])
        .unwrap();
        assert!(text.contains("Boundary=optical"));
        assert!(text.contains("c_cross_pj: 400.000000"));
    }

    #[test]
    fn test_model_errors_surface() {
        assert!(run_args(&["crossingbench", "point", "--boundary", "optical"]).is_err());
        assert!(run_args(&["crossingbench", "point", "--beta", "-1"]).is_err());
        assert!(run_args(&["crossingbench", "compare", "--reduce-factor", "0"]).is_err());
        assert!(run_args(&["crossingbench", "point", "--cross-bytes", "-10"]).is_err());
    }

    #[test]
    fn test_invalid_sweep_range_writes_nothing() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("sweep.csv");
        let result = run_args(&[
            "crossingbench",
            "sweep",
            "--steps",
            "1",
            "--out",
            csv_path.to_str().unwrap(),
        ]);
        assert!(result.is_err());
        assert!(!csv_path.exists());
    }
}
