//! Time utilities: parsing HH:MM and formatting second counts.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// `HH:MM` → minutes from midnight.
pub fn parse_minutes(t: &str) -> AppResult<u32> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Seconds as `45s`, `2m 5s` or `1h 3m`; `-` when absent.
pub fn format_secs(secs: Option<f64>) -> String {
    let Some(secs) = secs else {
        return "-".to_string();
    };

    let s = secs.round() as i64;
    if s < 60 {
        return format!("{s}s");
    }

    let mins = s / 60;
    if mins < 60 {
        return format!("{}m {}s", mins, s % 60);
    }

    format!("{}h {}m", mins / 60, mins % 60)
}

/// Seconds as `m:ss`; `-` when absent.
pub fn format_secs_short(secs: Option<f64>) -> String {
    match secs {
        Some(secs) => {
            let s = secs.round() as i64;
            format!("{}:{:02}", s / 60, s % 60)
        }
        None => "-".to_string(),
    }
}
