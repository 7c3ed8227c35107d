//! One analysis run: the loaded records and the scope every report uses.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::loader::queue::is_queue_export;
use crate::loader::{CsvLoader, QueueMap, RecordLoader, load_queue_file, merge_queue_maps};
use crate::models::CallRecord;
use crate::query::{QueueFilter, Scope, Subset};
use crate::utils::date::parse_period;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Dataset selection coming from the command line. Empty fields fall back to
/// the configuration.
#[derive(Debug, Clone, Default)]
pub struct ScopeOptions {
    pub file: Option<PathBuf>,
    pub queue_files: Vec<PathBuf>,
    pub period: Option<String>,
    pub location: Option<String>,
    pub queue: Option<String>,
    pub all_hours: bool,
    pub include_internal: bool,
}

impl ScopeOptions {
    /// The data file to read: `--file`, else `data_file` from the config.
    pub fn data_file(&self, cfg: &Config) -> AppResult<PathBuf> {
        if let Some(f) = &self.file {
            return Ok(f.clone());
        }
        if cfg.data_file.trim().is_empty() {
            return Err(AppError::Config(
                "no data file: pass --file or set data_file in the configuration".to_string(),
            ));
        }
        Ok(expand_tilde(cfg.data_file.trim()))
    }

    fn queue_files(&self, cfg: &Config) -> Vec<PathBuf> {
        if !self.queue_files.is_empty() {
            return self.queue_files.clone();
        }
        cfg.queue_files.iter().map(|f| expand_tilde(f)).collect()
    }

    /// Build the scope stages from these options and the configuration.
    pub fn scope(&self, cfg: &Config) -> AppResult<Scope> {
        let period = self.period.as_deref().map(parse_period).transpose()?;

        let opening_hours = if self.all_hours {
            None
        } else {
            Some(cfg.opening_hours()?)
        };

        let internal_extensions = if self.include_internal {
            Vec::new()
        } else {
            cfg.internal_extensions.clone()
        };

        // configured site name, otherwise the value itself as an office pattern
        let location = self.location.as_deref().map(|loc| {
            cfg.site_patterns(loc).unwrap_or_else(|| {
                debug!(location = loc, "not a configured site, matching office name");
                vec![loc.to_string()]
            })
        });

        Ok(Scope {
            period,
            opening_hours,
            internal_extensions,
            location,
            queue: self.queue.as_deref().map(QueueFilter::parse),
        })
    }
}

pub struct Analysis {
    pub records: Vec<CallRecord>,
    pub scope: Scope,
    pub config: Config,
}

impl Analysis {
    /// Load the data file (joined with the queue exports) and resolve the scope.
    pub fn load(opts: &ScopeOptions, cfg: &Config) -> AppResult<Self> {
        let scope = opts.scope(cfg)?;
        let path = opts.data_file(cfg)?;
        if is_queue_export(&path) {
            warn!(file = %path.display(), "data file looks like a queue export");
        }

        let maps = opts
            .queue_files(cfg)
            .iter()
            .map(|p| load_queue_file(p))
            .collect::<Result<Vec<QueueMap>, _>>()?;
        let queues = merge_queue_maps(maps);

        let records = CsvLoader::new(&path).with_queues(queues).load()?;
        info!(file = %path.display(), records = records.len(), "dataset loaded");

        Ok(Self::from_records(records, scope, cfg.clone()))
    }

    pub fn from_records(records: Vec<CallRecord>, scope: Scope, config: Config) -> Self {
        Self {
            records,
            scope,
            config,
        }
    }

    pub fn scoped(&self) -> Subset<'_> {
        self.scope.apply(&self.records)
    }

    pub fn out_of_hours(&self) -> usize {
        self.scope.out_of_hours(&self.records)
    }
}
