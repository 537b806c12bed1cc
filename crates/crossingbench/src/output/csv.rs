//! Sweep table rendering.
//!
//! The column set is a stability contract for downstream tooling.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use crossingbench_core::SweepRow;

use super::atomic_write;

pub const SWEEP_HEADER: [&str; 8] = [
    "bytes_compute",
    "bytes_cross",
    "events_cross",
    "c_intra_pj",
    "c_cross_pj",
    "c_total_pj",
    "crossing_fraction",
    "epsilon_local",
];

/// Written in place of an undefined `epsilon_local`: an empty field, which
/// numeric CSV readers load as a missing value.
pub const UNDEFINED_PLACEHOLDER: &str = "";

/// Render sweep rows as CSV text, header first
pub fn sweep_csv(rows: &[SweepRow]) -> String {
    let mut out = String::with_capacity(64 * (rows.len() + 1));
    out.push_str(&SWEEP_HEADER.join(","));
    out.push('\n');

    for row in rows {
        let epsilon = row
            .epsilon_local
            .map_or_else(|| UNDEFINED_PLACEHOLDER.to_string(), |e| format!("{e:.6}"));
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{},{},{},{:.6},{:.6},{:.6},{:.6},{}",
            row.bytes_compute,
            row.bytes_cross,
            row.events_cross,
            row.cost.c_intra_pj,
            row.cost.c_cross_pj,
            row.cost.c_total_pj,
            row.cost.crossing_fraction,
            epsilon,
        );
    }
    out
}

/// Write sweep rows to `path` as CSV
pub fn write_sweep_csv(path: &Path, rows: &[SweepRow]) -> io::Result<()> {
    atomic_write(path, sweep_csv(rows).as_bytes())
}
