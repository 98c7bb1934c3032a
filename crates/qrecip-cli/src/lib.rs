//! qrecip CLI crate
//!
//! Wraps `qrecip_core` in a command-line interface:
//! - series (default): accumulate the alternating series and print the
//!   four-line report (sum as a real, raw sum with its decimal weight, the
//!   weighted answer, and the 2^62 reference bound).
//! - recip: compute one reciprocal, optionally listing every Newton estimate.
//!
//! The binary (src/main.rs) loads configuration, wires up logging on stderr
//! ([`logging`]), and calls [`QrecipCli::execute`]. Stdout carries command
//! output only; failures are always printed to stderr before exiting with 1.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use commands::QrecipCli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
