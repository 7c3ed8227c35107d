// src/loader/timestamp.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use regex::Regex;
use std::sync::LazyLock;

/// DD/MM/YYYY with optional H:MM[:SS] and optional AM/PM.
static AU_DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(\d{1,2})/(\d{1,2})/(\d{4})(?:\s+(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s*(AM|PM))?)?\s*$",
    )
    .expect("static regex")
});

/// Interpret a `CallDateTime` cell.
///
/// Accepted, in order:
/// - Excel serial number (`46040.4375`)
/// - `DD/MM/YYYY`, `DD/MM/YYYY HH:MM[:SS]`, optionally followed by `AM`/`PM`
/// - ISO date-times (`YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]`)
/// - `YYYY-MM-DD` (midnight)
pub fn parse_call_datetime(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(serial) = s.parse::<f64>() {
        return excel_serial_to_datetime(serial);
    }

    if let Some(dt) = parse_au_datetime(s) {
        return Some(dt);
    }

    let dt_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

fn parse_au_datetime(s: &str) -> Option<NaiveDateTime> {
    let caps = AU_DATETIME.captures(s)?;
    let num = |i: usize| -> Option<u32> { caps.get(i).and_then(|m| m.as_str().parse().ok()) };

    let day = num(1)?;
    let month = num(2)?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;

    let mut hours = num(4).unwrap_or(0);
    let minutes = num(5).unwrap_or(0);
    let seconds = num(6).unwrap_or(0);

    match caps.get(7).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(ampm) if ampm == "PM" && hours != 12 => hours += 12,
        Some(ampm) if ampm == "AM" && hours == 12 => hours = 0,
        _ => {}
    }

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hours, minutes, seconds)
}

/// Largest serial Excel accepts: 9999-12-31.
const EXCEL_MAX_SERIAL: f64 = 2_958_465.0;

/// Excel day 0 is 1899-12-30; the fraction is the time of day, rounded to the second.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..=EXCEL_MAX_SERIAL).contains(&serial) {
        return None;
    }

    let days = serial.floor();
    let secs = ((serial - days) * 86400.0).round() as i64;

    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);

    excel_epoch
        .checked_add_signed(TimeDelta::try_days(days as i64)?)?
        .checked_add_signed(TimeDelta::try_seconds(secs)?)
}
