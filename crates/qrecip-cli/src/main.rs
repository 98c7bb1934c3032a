//! # qrecip - fixed-point reciprocal series
//!
//! Reproduces the reference run when invoked without arguments.

use clap::Parser;
use tracing::error;

use qrecip_cli::{logging, CliConfig, CliError, QrecipCli};

/// Print to stderr unconditionally; the subscriber may be filtered off
fn fail(err: CliError) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}

fn main() {
    // Parse CLI arguments
    let cli = QrecipCli::parse();
    let config = CliConfig::resolve(cli.config.as_deref()).unwrap_or_else(|err| fail(err));

    // Initialize logging on stderr with environment variable support
    let default_level = if cli.verbose {
        "debug"
    } else if cli.traces_terms() {
        "info"
    } else {
        config.log_level.as_deref().unwrap_or("warn")
    };
    if let Err(err) = logging::init_logging(default_level) {
        fail(err);
    }

    // Execute the command
    if let Err(err) = cli.execute(&config) {
        error!("Command failed: {}", err);
        fail(err);
    }
}
