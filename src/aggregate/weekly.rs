//! Monday-to-Sunday weeks and per-week inbound metrics.

use super::metrics::CallMetrics;
use crate::models::{CallRecord, Direction, Seconds};
use crate::query::{Subset, filter_by_direction, group_by};
use chrono::{NaiveDate, Weekday};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Week {
    /// Monday
    pub start: NaiveDate,
    /// Sunday
    pub end: NaiveDate,
}

impl Week {
    pub fn containing(date: NaiveDate) -> Self {
        let week = date.week(Weekday::Mon);
        Self {
            start: week.first_day(),
            end: week.last_day(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// `12 Jan 2026`
    pub fn label(&self) -> String {
        self.start.format("%-d %b %Y").to_string()
    }
}

/// Every week from the one holding the earliest call to the one holding the
/// latest, weeks without calls included.
pub fn weeks_in<'a, I>(records: I) -> Vec<Week>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let mut dates = records.into_iter().map(|r| r.call_datetime.date());
    let Some(first) = dates.next() else {
        return Vec::new();
    };
    let (first, last) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));

    let mut weeks = Vec::new();
    let mut week = Week::containing(first);
    loop {
        weeks.push(week);
        match week.end.succ_opt() {
            Some(next) if next <= last => week = Week::containing(next),
            _ => break,
        }
    }
    weeks
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyMetrics {
    pub week: Week,
    pub metrics: CallMetrics,
}

/// Inbound metrics for each week of `weeks_in(records)`. Weeks are found
/// over every call, so a week with only outbound calls still shows.
pub fn weekly_trend<'a, I>(records: I, service_level_target: Seconds) -> Vec<WeeklyMetrics>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let calls: Subset<'a> = records.into_iter().collect();
    let inbound = filter_by_direction(calls.iter().copied(), Direction::Inbound);
    let by_week = group_by(inbound, |r: &CallRecord| {
        Week::containing(r.call_datetime.date()).start
    });

    weeks_in(calls.iter().copied())
        .into_iter()
        .map(|week| {
            let week_calls = by_week.get(&week.start).map(|g| g.as_slice()).unwrap_or(&[]);
            WeeklyMetrics {
                week,
                metrics: CallMetrics::compute(week_calls.iter().copied(), service_level_target),
            }
        })
        .collect()
}

/// Totals divided by the number of weeks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyAverage {
    pub weeks: usize,
    pub total: f64,
    pub answered: f64,
    pub missed: f64,
}

/// `None` when there are no weeks.
pub fn weekly_average(trend: &[WeeklyMetrics]) -> Option<WeeklyAverage> {
    if trend.is_empty() {
        return None;
    }

    let weeks = trend.len();
    let per_week = |f: fn(&CallMetrics) -> usize| {
        trend.iter().map(|w| f(&w.metrics)).sum::<usize>() as f64 / weeks as f64
    };

    Some(WeeklyAverage {
        weeks,
        total: per_week(|m| m.total),
        answered: per_week(|m| m.answered),
        missed: per_week(|m| m.missed),
    })
}
