use crate::cli::commands::{open, print_tables};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reports::ReportLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary = cli.command {
        let analysis = open(cli, cfg)?;

        if analysis.scoped().is_empty() {
            warning("No calls in the selected scope.");
        }

        print_tables(&ReportLogic::summary(&analysis))?;
    }
    Ok(())
}
