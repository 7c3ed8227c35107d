use crate::cli::commands::{open, print_tables};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reports::ReportLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Weekly = &cli.command {
        let analysis = open(cli, cfg)?;
        let tables = ReportLogic::weekly(&analysis);
        if tables.iter().all(|t| t.rows.len() < 2) {
            info("Fewer than two weeks in scope; no trend to compare.");
        }
        print_tables(&tables)?;
    }
    Ok(())
}
