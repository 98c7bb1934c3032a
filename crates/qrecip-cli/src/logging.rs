//! Logging setup: tracing to stderr so stdout carries only command output

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::CliResult;

/// Filter used when `RUST_LOG` is unset or unparseable
pub fn default_filter(level: &str) -> CliResult<EnvFilter> {
    let filter = EnvFilter::try_new(level).with_context(|| format!("invalid log level {:?}", level))?;
    Ok(filter)
}

/// Install the global subscriber
pub fn init_logging(level: &str) -> CliResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => default_filter(level)?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}
