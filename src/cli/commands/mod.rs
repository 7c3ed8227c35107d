pub mod abandoned;
pub mod config;
pub mod daily;
pub mod export;
pub mod followup;
pub mod hangups;
pub mod heatmap;
pub mod hourly;
pub mod inspect;
pub mod pickup;
pub mod queues;
pub mod repeats;
pub mod sites;
pub mod staff;
pub mod summary;
pub mod weekly;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::analysis::Analysis;
use crate::errors::AppResult;
use crate::report::{ReportTable, write_text};
use crate::utils::colors::key_value;
use std::io;

/// Load the dataset for an analysis command and print what is in scope.
pub(crate) fn open(cli: &Cli, cfg: &Config) -> AppResult<Analysis> {
    let opts = cli.scope_options();
    let analysis = Analysis::load(&opts, cfg)?;

    println!("{}", key_value("Records loaded", &analysis.records.len().to_string()));
    println!("{}", key_value("In scope", &analysis.scoped().len().to_string()));
    if let Some(p) = &opts.period {
        println!("{}", key_value("Period", p));
    }
    if let Some(l) = &opts.location {
        println!("{}", key_value("Location", l));
    }
    if let Some(q) = &opts.queue {
        println!("{}", key_value("Queue", q));
    }

    Ok(analysis)
}

pub(crate) fn print_tables(tables: &[ReportTable]) -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_text(&mut out, tables)?;
    Ok(())
}
