use crate::aggregate::histogram::parse_boundaries;
use crate::cli::commands::{open, print_tables};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reports::ReportLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Abandoned { boundaries } = &cli.command {
        let boundaries = match boundaries {
            Some(b) => parse_boundaries(b)?,
            None => cfg.abandon_boundaries.clone(),
        };

        let analysis = open(cli, cfg)?;
        print_tables(&ReportLogic::abandoned(&analysis, &boundaries)?)?;
    }
    Ok(())
}
