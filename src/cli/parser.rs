use crate::aggregate::HeatmapMetric;
use crate::core::analysis::ScopeOptions;
use crate::export::ExportFormat;
use crate::models::Direction;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for callstats
/// CLI application to analyze phone-system call exports
#[derive(Parser)]
#[command(
    name = "callstats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze phone-call exports: pickup times, missed calls and repeat callers",
    long_about = None
)]
pub struct Cli {
    /// Call export to analyze (CSV). Overrides `data_file` from the configuration.
    #[arg(global = true, long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Queue export (CSV) joined by CallGUID; repeat for several queues.
    #[arg(global = true, long = "queue-file", value_name = "FILE")]
    pub queue_files: Vec<PathBuf>,

    /// Use another configuration file (default: ~/.callstats/callstats.conf)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Restrict to a period.
    ///
    /// Supported formats:
    /// - YYYY                  → entire year (e.g. "2026")
    /// - YYYY-MM              → entire month (e.g. "2026-01")
    /// - YYYY-MM-DD           → specific day (e.g. "2026-01-12")
    ///
    /// Ranges (start:end) in the same format:
    /// - YYYY-MM:YYYY-MM      → month range          (e.g. "2025-11:2026-01")
    /// - YYYY-MM-DD:YYYY-MM-DD→ day range           (e.g. "2026-01-05:2026-01-18")
    #[arg(
        global = true,
        long,
        short,
        help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
    )]
    pub period: Option<String>,

    /// Site name from the configuration, or any part of the office name
    #[arg(global = true, long)]
    pub location: Option<String>,

    /// Queue name; `none` keeps inbound calls that never entered a queue
    #[arg(global = true, long)]
    pub queue: Option<String>,

    /// Keep calls outside opening hours and on public holidays
    #[arg(global = true, long = "all-hours")]
    pub all_hours: bool,

    /// Keep calls handled by internal extensions (nurse and reception desks)
    #[arg(global = true, long = "include-internal")]
    pub include_internal: bool,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn scope_options(&self) -> ScopeOptions {
        ScopeOptions {
            file: self.file.clone(),
            queue_files: self.queue_files.clone(),
            period: self.period.clone(),
            location: self.location.clone(),
            queue: self.queue.clone(),
            all_hours: self.all_hours,
            include_internal: self.include_internal,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the columns, row count and first rows of the raw export
    Inspect {
        #[arg(long, default_value_t = 5, help = "Number of rows to preview")]
        preview: usize,

        #[arg(long, value_name = "COLUMN", help = "Count the raw values of one column")]
        column: Option<String>,
    },

    /// Headline service figures: answered, missed, service level, FCR
    Summary,

    /// Answered calls: fastest pickups and the pickup-time distribution
    Pickup {
        #[arg(
            long,
            value_name = "SECS",
            help = "Bucket boundaries in seconds, e.g. 5,10,20,30,60 (default from config)"
        )]
        boundaries: Option<String>,
    },

    /// Inbound callers who called more than once
    Repeats {
        #[arg(long, default_value_t = 10, help = "Number of repeat callers to list")]
        top: usize,
    },

    /// Counts per hangup reason
    Hangups,

    /// Unanswered inbound calls and wait before hang-up
    Abandoned {
        #[arg(
            long,
            value_name = "SECS",
            help = "Bucket boundaries in seconds, e.g. 35,60,120,300 (default from config)"
        )]
        boundaries: Option<String>,
    },

    /// Inbound metrics per configured site
    Sites,

    /// Metrics per weekday, Monday to Sunday
    Daily {
        #[arg(long, value_enum, default_value = "in", help = "Call direction")]
        direction: Direction,
    },

    /// Inbound and outbound calls per hour of the day
    Hourly,

    /// Weekday by half-hour grid of call volume, waits or missed calls
    Heatmap {
        #[arg(long, value_enum, default_value = "calls-in", help = "Value shown in each cell")]
        metric: HeatmapMetric,
    },

    /// Inbound metrics per Monday-to-Sunday week, with the weekly average
    Weekly,

    /// Missed calls per queue
    Queues,

    /// Per-user call counts and averages
    Staff,

    /// What happened to callers after a missed call
    Followup,

    /// Export every report to a file
    Export {
        /// Export format: csv, json, xlsx
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Output file path
        #[arg(long = "output", short = 'o', value_name = "FILE")]
        output: PathBuf,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view, create or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,

        #[arg(long = "force", requires = "init", help = "Overwrite with --init")]
        force: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
