use crate::cli::commands::{open, print_tables};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reports::ReportLogic;
use crate::errors::AppResult;
use crate::utils::colors::key_value;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Followup = cli.command {
        let analysis = open(cli, cfg)?;
        println!(
            "{}",
            key_value("Follow-up window", &format!("{}h", cfg.callback_window_hours))
        );
        print_tables(&ReportLogic::followup(&analysis))?;
    }
    Ok(())
}
