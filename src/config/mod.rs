use crate::aggregate::MAX_WINDOW_HOURS;
use crate::errors::{AppError, AppResult};
use crate::query::{DayHours, OpeningHours};
use crate::utils::time::parse_minutes;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Site {
    pub name: String,
    /// Case-insensitive substrings of `OfficeName`.
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoursConfig {
    pub open: String,
    pub close: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpeningHoursConfig {
    pub weekday: Option<HoursConfig>,
    pub saturday: Option<HoursConfig>,
    pub sunday: Option<HoursConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data_file: String,
    pub queue_files: Vec<String>,
    pub service_level_target_secs: f64,
    pub callback_window_hours: i64,
    pub pickup_boundaries: Vec<f64>,
    pub abandon_boundaries: Vec<f64>,
    pub exclude_public_holidays: bool,
    pub public_holidays: Vec<String>,
    pub internal_extensions: Vec<String>,
    pub sites: Vec<Site>,
    pub queues: Vec<String>,
    pub opening_hours: OpeningHoursConfig,
}

fn hours(open: &str, close: &str) -> Option<HoursConfig> {
    Some(HoursConfig {
        open: open.to_string(),
        close: close.to_string(),
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn site(name: &str, patterns: &[&str]) -> Site {
    Site {
        name: name.to_string(),
        patterns: strings(patterns),
    }
}

impl Default for OpeningHoursConfig {
    fn default() -> Self {
        Self {
            weekday: hours("07:30", "17:30"),
            saturday: hours("09:00", "12:30"),
            sunday: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: String::new(),
            queue_files: Vec::new(),
            service_level_target_secs: 90.0,
            callback_window_hours: 24,
            pickup_boundaries: vec![5.0, 10.0, 20.0, 30.0, 60.0],
            abandon_boundaries: vec![35.0, 60.0, 120.0, 300.0],
            exclude_public_holidays: true,
            // ACT public holidays 2025-2026
            public_holidays: strings(&[
                "2025-01-27", "2025-03-10", "2025-04-18", "2025-04-19", "2025-04-21",
                "2025-04-25", "2025-05-26", "2025-06-09", "2025-10-06", "2025-12-25",
                "2025-12-26", "2026-01-01", "2026-01-26", "2026-03-09", "2026-04-03",
                "2026-04-04", "2026-04-06", "2026-04-27", "2026-06-01", "2026-06-08",
                "2026-10-05", "2026-12-25", "2026-12-28",
            ]),
            internal_extensions: strings(&[
                "Nurse 1",
                "Crace",
                "Lyneham - Rec 1",
                "Crace - Rec 1",
                "Crace - Rec 2",
                "Crace Office",
                "Nurse 5 (TR1)",
                "Nurse 2",
                "Nurse Consult",
                "Lyneham - Nurse",
                "Nurse 3 (TR2)",
                "Denman - Nurse",
                "Nurse 4 (TR2)",
                "Denman - Rec 1",
            ]),
            sites: vec![
                site("Crace", &["crace"]),
                site("Denman", &["denman"]),
                site("Lyneham", &["lyneham"]),
                site("Practice Support", &["practice support"]),
                site("Management", &["management / support", "management/support"]),
            ],
            queues: strings(&[
                "Appointments",
                "Canberra Vasectomy",
                "General Enquiries",
                "Health Professionals",
            ]),
            opening_hours: OpeningHoursConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".callstats")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("callstats.conf")
    }

    /// Load the YAML file at `path`, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Self = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Ok(cfg)
    }

    /// Range checks serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_WINDOW_HOURS).contains(&self.callback_window_hours) {
            return Err(format!(
                "callback_window_hours must be between 1 and {MAX_WINDOW_HOURS}, got {}",
                self.callback_window_hours
            ));
        }

        if !self.service_level_target_secs.is_finite() || self.service_level_target_secs < 0.0 {
            return Err(format!(
                "service_level_target_secs must be a non-negative number, got {}",
                self.service_level_target_secs
            ));
        }

        Ok(())
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn holidays(&self) -> AppResult<HashSet<NaiveDate>> {
        if !self.exclude_public_holidays {
            return Ok(HashSet::new());
        }

        self.public_holidays
            .iter()
            .map(|d| {
                NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidDate(d.clone()))
            })
            .collect()
    }

    pub fn opening_hours(&self) -> AppResult<OpeningHours> {
        let day = |h: &Option<HoursConfig>| -> AppResult<Option<DayHours>> {
            match h {
                Some(h) => Ok(Some(DayHours {
                    open: parse_minutes(&h.open)?,
                    close: parse_minutes(&h.close)?,
                })),
                None => Ok(None),
            }
        };

        Ok(OpeningHours {
            weekday: day(&self.opening_hours.weekday)?,
            saturday: day(&self.opening_hours.saturday)?,
            sunday: day(&self.opening_hours.sunday)?,
            holidays: self.holidays()?,
        })
    }

    /// Office patterns of a site, matched by name case-insensitively.
    pub fn site_patterns(&self, name: &str) -> Option<Vec<String>> {
        self.sites
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.patterns.clone())
    }
}
