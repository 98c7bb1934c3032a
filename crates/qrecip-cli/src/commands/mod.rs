//! CLI command implementations for qrecip

use clap::{Parser, Subcommand};

use crate::config::CliConfig;
use crate::error::CliResult;

pub mod recip;
pub mod series;

/// qrecip - integer-only Newton-Raphson reciprocals and the Leibniz series
#[derive(Parser, Debug)]
#[command(
    name = "qrecip",
    version,
    about = "Integer-only Newton-Raphson reciprocals and the Leibniz series",
    long_about = "qrecip computes reciprocals of odd integers in Q35.28 fixed point using a \
                  fixed number of Newton-Raphson rounds, and accumulates 4 * sum((-1)^i / (2i+1)) \
                  from them. Run without a subcommand to reproduce the reference report."
)]
pub struct QrecipCli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "QRECIP_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Accumulate the alternating series and print the four-line report (default)
    #[command(alias = "run")]
    Series(series::SeriesCommand),

    /// Compute the fixed-point reciprocal of one odd divisor
    Recip(recip::RecipCommand),
}

impl QrecipCli {
    /// Whether the command asks for per-term logging
    pub fn traces_terms(&self) -> bool {
        matches!(&self.command, Some(Commands::Series(cmd)) if cmd.trace)
    }

    /// Execute the CLI command
    pub fn execute(self, config: &CliConfig) -> CliResult<()> {
        match self.command {
            Some(Commands::Series(cmd)) => cmd.execute(config),
            Some(Commands::Recip(cmd)) => cmd.execute(config),
            None => series::SeriesCommand::default().execute(config),
        }
    }
}
