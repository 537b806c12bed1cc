//! Command-line front end for the domain-crossing cost model.
//!
//! The numeric work lives in `crossingbench_core`; this crate parses
//! arguments, loads parameter files, and renders CSV/JSON/console output.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod params_file;

pub use cli::Cli;
pub use commands::run;
pub use logging::init_logging;
