//! The dataset scope: which loaded calls an analysis looks at.
//!
//! Stages run in a fixed order: period, opening hours (public holidays
//! closed), internal extensions, location, queue. A stage set to `None` or
//! left empty is skipped.

use super::predicates::{self, Predicate};
use super::{filter, Subset};
use crate::models::CallRecord;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use std::collections::HashSet;
use tracing::debug;

/// Open and close as minutes from midnight, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    pub open: u32,
    pub close: u32,
}

impl DayHours {
    pub fn contains(&self, minute_of_day: u32) -> bool {
        minute_of_day >= self.open && minute_of_day <= self.close
    }
}

#[derive(Debug, Clone, Default)]
pub struct OpeningHours {
    pub weekday: Option<DayHours>,
    pub saturday: Option<DayHours>,
    pub sunday: Option<DayHours>,
    pub holidays: HashSet<NaiveDate>,
}

impl OpeningHours {
    /// Seconds are ignored: 17:30:59 is still 17:30.
    pub fn is_open(&self, at: NaiveDateTime) -> bool {
        if self.holidays.contains(&at.date()) {
            return false;
        }

        let hours = match at.weekday() {
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
            _ => self.weekday,
        };

        let minute_of_day = at.hour() * 60 + at.minute();
        hours.is_some_and(|h| h.contains(minute_of_day))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueFilter {
    Named(String),
    /// Inbound calls that never entered a queue.
    NoQueue,
}

impl QueueFilter {
    /// `none` selects calls without a queue; anything else is a queue name.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("noqueue") {
            QueueFilter::NoQueue
        } else {
            QueueFilter::Named(s.to_string())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scope {
    pub period: Option<(NaiveDate, NaiveDate)>,
    pub opening_hours: Option<OpeningHours>,
    pub internal_extensions: Vec<String>,
    pub location: Option<Vec<String>>,
    pub queue: Option<QueueFilter>,
}

impl Scope {
    /// Every stage disabled: `apply` returns all records.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn apply<'a>(&self, records: &'a [CallRecord]) -> Subset<'a> {
        let scoped = self.apply_except_hours(records);
        let scoped = match &self.opening_hours {
            Some(hours) => filter(scoped, |r: &CallRecord| hours.is_open(r.call_datetime)),
            None => scoped,
        };
        debug!(loaded = records.len(), scoped = scoped.len(), "scope applied");
        scoped
    }

    /// Inbound calls that pass every other stage but fall outside opening hours.
    /// Zero when opening hours are disabled.
    pub fn out_of_hours(&self, records: &[CallRecord]) -> usize {
        let Some(hours) = &self.opening_hours else {
            return 0;
        };

        self.apply_except_hours(records)
            .into_iter()
            .filter(|r| r.direction.is_inbound() && !hours.is_open(r.call_datetime))
            .count()
    }

    fn apply_except_hours<'a>(&self, records: &'a [CallRecord]) -> Subset<'a> {
        let mut out: Subset<'a> = records.iter().collect();

        if let Some((start, end)) = self.period {
            out = filter(out, predicates::on_days(start, end));
        }

        if !self.internal_extensions.is_empty() {
            out = filter(
                out,
                predicates::internal_extension(&self.internal_extensions).not(),
            );
        }

        if let Some(patterns) = &self.location {
            out = filter(out, predicates::office_matches(patterns));
        }

        match &self.queue {
            Some(QueueFilter::Named(name)) => out = filter(out, predicates::queue_is(name.clone())),
            Some(QueueFilter::NoQueue) => {
                out = filter(
                    out,
                    predicates::without_queue().and(|r: &CallRecord| r.direction.is_inbound()),
                )
            }
            None => {}
        }

        out
    }
}
