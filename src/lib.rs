//! callstats library root.
//! Exposes the query engine and aggregator over call records, the CLI parser
//! and the high-level run() function.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod loader;
pub mod logging;
pub mod models;
pub mod query;
pub mod report;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Inspect { .. } => cli::commands::inspect::handle(cli, cfg),
        Commands::Summary => cli::commands::summary::handle(cli, cfg),
        Commands::Pickup { .. } => cli::commands::pickup::handle(cli, cfg),
        Commands::Repeats { .. } => cli::commands::repeats::handle(cli, cfg),
        Commands::Hangups => cli::commands::hangups::handle(cli, cfg),
        Commands::Abandoned { .. } => cli::commands::abandoned::handle(cli, cfg),
        Commands::Sites => cli::commands::sites::handle(cli, cfg),
        Commands::Daily { .. } => cli::commands::daily::handle(cli, cfg),
        Commands::Hourly => cli::commands::hourly::handle(cli, cfg),
        Commands::Heatmap { .. } => cli::commands::heatmap::handle(cli, cfg),
        Commands::Weekly => cli::commands::weekly::handle(cli, cfg),
        Commands::Queues => cli::commands::queues::handle(cli, cfg),
        Commands::Staff => cli::commands::staff::handle(cli, cfg),
        Commands::Followup => cli::commands::followup::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics on stderr
    logging::init(cli.verbose);

    // 3️⃣ load config once: --config, else the default location
    let path = cli.config.clone().unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&path)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
