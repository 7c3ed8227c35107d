use crate::cli::commands::print_tables;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::inspect::InspectLogic;
use crate::errors::AppResult;
use crate::utils::colors::key_value;

/// Raw view of the export: no typing, no scope.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Inspect { preview, column } = &cli.command {
        let path = cli.scope_options().data_file(cfg)?;
        println!("{}", key_value("File", &path.display().to_string()));

        let tables = InspectLogic::tables(&path, *preview, column.as_deref())?;
        print_tables(&tables)?;
    }
    Ok(())
}
