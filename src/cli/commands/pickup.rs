use crate::aggregate::histogram::parse_boundaries;
use crate::cli::commands::{open, print_tables};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reports::ReportLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Pickup { boundaries } = &cli.command {
        // parse before loading so a typo fails fast
        let boundaries = match boundaries {
            Some(b) => parse_boundaries(b)?,
            None => cfg.pickup_boundaries.clone(),
        };

        let analysis = open(cli, cfg)?;
        print_tables(&ReportLogic::pickup(&analysis, &boundaries)?)?;
    }
    Ok(())
}
