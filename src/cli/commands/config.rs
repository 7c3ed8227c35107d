use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli.config.clone().unwrap_or_else(Config::config_file);

        // ---- INIT CONFIG ----
        if *init {
            ConfigLogic::init(&path, *force)?;
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor.as_deref())?;
        }

        if !(*init || *print_config || *edit_config) {
            info(format!("Configuration file: {}", path.display()));
        }
    }
    Ok(())
}
