use crate::cli::commands::{open, print_tables};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reports::ReportLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Heatmap { metric } = &cli.command {
        let analysis = open(cli, cfg)?;
        print_tables(&ReportLogic::heatmap(&analysis, *metric))?;
    }
    Ok(())
}
