use crate::cli::commands::open;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reports::ReportLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        output,
        force,
    } = &cli.command
    {
        let analysis = open(cli, cfg)?;
        let tables = ReportLogic::all(&analysis)?;
        ExportLogic::export(&tables, *format, output, *force)?;
    }
    Ok(())
}
