//! Series accumulation command

use clap::Args;
use tracing::{debug, info};

use qrecip_core::{Report, SeriesParams};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Accumulate the alternating reciprocal series
#[derive(Args, Debug, Default)]
pub struct SeriesCommand {
    /// Number of terms (default 100000)
    #[arg(short, long)]
    pub terms: Option<u64>,

    /// Newton rounds per reciprocal (default 40)
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Log every term's divisor and reciprocal
    #[arg(long)]
    pub trace: bool,
}

impl SeriesCommand {
    /// Resolve flags over the configuration file
    pub fn params(&self, config: &CliConfig) -> SeriesParams {
        SeriesParams {
            terms: self.terms.unwrap_or(config.series.terms),
            rounds: self.rounds.unwrap_or(config.series.rounds),
            ..config.series
        }
    }

    /// Run the series and print the report to stdout
    pub fn execute(self, config: &CliConfig) -> CliResult<()> {
        let params = self.params(config);
        info!(
            "Accumulating {} terms with {} Newton rounds",
            params.terms, params.rounds
        );
        let accumulator = params.accumulator()?;

        let trace = self.trace;
        let sum = accumulator.compute_series_with(params.terms, |term| {
            if trace {
                info!(
                    index = term.index,
                    divisor = term.divisor.get(),
                    raw = term.reciprocal.to_raw(),
                    "compute 1 / {}, res = {}",
                    term.divisor.get(),
                    term.reciprocal
                );
            }
        })?;

        let report = Report::from_sum(sum)?;
        debug!("answer within 2^62: {}", report.within_bounds());
        println!("{}", report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.series.terms = 10;
        config.series.rounds = 7;

        let cmd = SeriesCommand {
            terms: Some(3),
            ..Default::default()
        };
        let params = cmd.params(&config);
        assert_eq!(params.terms, 3);
        assert_eq!(params.rounds, 7);
    }

    #[test]
    fn test_defaults_match_reference_run() {
        let params = SeriesCommand::default().params(&CliConfig::default());
        assert_eq!(params, SeriesParams::default());
    }
}
