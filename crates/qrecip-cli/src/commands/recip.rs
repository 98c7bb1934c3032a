//! Single reciprocal command

use clap::Args;
use tracing::info;

use qrecip_core::{Divisor, ReciprocalEngine};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Compute one fixed-point reciprocal
#[derive(Args, Debug)]
pub struct RecipCommand {
    /// Odd positive divisor
    pub divisor: u64,

    /// Newton rounds (default 40)
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Print every intermediate Newton estimate
    #[arg(long)]
    pub steps: bool,
}

impl RecipCommand {
    /// Compute and print the reciprocal
    pub fn execute(self, config: &CliConfig) -> CliResult<()> {
        let divisor = Divisor::new(self.divisor)?;
        let engine = ReciprocalEngine::with_rounds(self.rounds.unwrap_or(config.series.rounds))?;

        if self.steps {
            for (round, estimate) in (1u32..).zip(engine.iterations(divisor)) {
                println!("round {:>2}: {} {}", round, estimate.to_raw(), estimate);
            }
        }

        match engine.converged_after(divisor) {
            Some(rounds) => info!("1 / {} stable after {} rounds", divisor.get(), rounds),
            None => info!("1 / {} still moving after {} rounds", divisor.get(), engine.rounds()),
        }

        let x = engine.reciprocal(divisor);
        println!("1 / {} = {} (raw {})", divisor.get(), x, x.to_raw());
        Ok(())
    }
}
