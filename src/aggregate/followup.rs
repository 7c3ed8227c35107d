//! What happened to callers after a missed call.

use super::{average, window};
use super::frequency::{FrequencyTable, count_values};
use crate::models::{CallRecord, Direction, Seconds};
use crate::query::{Predicate, filter, group_by, predicates};
use chrono::Duration;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Followup {
    /// Callers never answered within the window after their first missed call.
    pub lost: usize,
    /// Callers answered within the window after their first missed call.
    pub persistent: usize,
    /// Calls up to and including the answered one: [1, 2, 3+].
    pub attempts: AttemptsDistribution,
    pub avg_attempts: Option<f64>,
    /// Hour of day of the first missed call, per lost caller.
    pub lost_by_hour: FrequencyTable<u32>,
    pub avg_wait_before_hangup: Option<Seconds>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttemptsDistribution {
    pub one: usize,
    pub two: usize,
    pub three_or_more: usize,
}

impl Followup {
    /// Busiest hours for lost callers, busiest first.
    pub fn peak_lost_hours(&self, n: usize) -> Vec<(u32, usize)> {
        self.lost_by_hour
            .sorted()
            .into_iter()
            .take(n)
            .map(|(h, c)| (*h, c))
            .collect()
    }
}

pub fn missed_call_followup<'a, I>(records: I, window_hours: i64) -> Followup
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let inbound = filter(
        records,
        predicates::direction_is(Direction::Inbound).and(predicates::has_caller_id()),
    );
    let by_caller = group_by(inbound, |r| r.caller_id().unwrap_or_default().to_string());
    let span = window(window_hours);

    let mut lost = 0;
    let mut persistent = 0;
    let mut attempts = AttemptsDistribution::default();
    let mut attempt_counts: Vec<usize> = Vec::new();
    let mut lost_hours: Vec<u32> = Vec::new();
    let mut missed_waits: Vec<Seconds> = Vec::new();

    for (_, calls) in by_caller.iter() {
        let mut calls = calls.clone();
        calls.sort_by_key(|c| c.call_datetime);

        let Some(first_missed) = calls.iter().find(|c| !c.is_answered()) else {
            continue;
        };
        let start = first_missed.call_datetime;

        let in_window: Vec<&CallRecord> = calls
            .iter()
            .copied()
            .filter(|c| {
                let diff = c.call_datetime - start;
                diff >= Duration::zero() && diff <= span
            })
            .collect();

        missed_waits.extend(
            in_window
                .iter()
                .filter(|c| !c.is_answered())
                .map(|c| c.call_duration),
        );

        match in_window.iter().position(|c| c.is_answered()) {
            Some(answered_idx) => {
                persistent += 1;
                let n = answered_idx + 1;
                attempt_counts.push(n);
                match n {
                    1 => attempts.one += 1,
                    2 => attempts.two += 1,
                    _ => attempts.three_or_more += 1,
                }
            }
            None => {
                lost += 1;
                lost_hours.push(first_missed.hour());
            }
        }
    }

    Followup {
        lost,
        persistent,
        attempts,
        avg_attempts: average(attempt_counts.iter().map(|n| *n as f64)),
        lost_by_hour: count_values(lost_hours),
        avg_wait_before_hangup: average(missed_waits.into_iter()),
    }
}
