use crate::aggregate::queue_breakdown;
use crate::cli::commands::{open, print_tables};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::report::tables::queue_table;
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_miss_rate, key_value};
use crate::utils::formatting::pct;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Queues = cli.command {
        let analysis = open(cli, cfg)?;
        let rows = queue_breakdown(analysis.scoped(), &cfg.queues);

        if analysis.records.iter().all(|r| r.queue_name.is_none()) {
            warning("No queue names loaded: pass --queue-file or set queue_files.");
        }

        print_tables(&[queue_table(&rows)])?;

        let worst = rows
            .iter()
            .filter(|r| r.queue != "TOTAL" && r.total > 0)
            .max_by(|a, b| a.miss_rate.total_cmp(&b.miss_rate));

        if let Some(w) = worst {
            let rate = format!("{}{}{}", color_for_miss_rate(w.miss_rate), pct(w.miss_rate), RESET);
            println!();
            println!("{}", key_value("Highest miss rate", &format!("{} ({rate})", w.queue)));
        }
    }
    Ok(())
}
