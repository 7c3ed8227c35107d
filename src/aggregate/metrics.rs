use super::{average, percent};
use crate::models::{CallRecord, Seconds};
use serde::Serialize;

/// Headline service figures for one slice of calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CallMetrics {
    pub total: usize,
    pub answered: usize,
    pub unanswered: usize,
    /// Queued calls that were never answered.
    pub missed: usize,
    pub missed_pct: f64,
    pub avg_wait: Option<Seconds>,
    pub max_wait: Option<Seconds>,
    pub avg_talk_time: Option<Seconds>,
    /// Share of all calls answered within the target, in percent.
    pub service_level: f64,
}

impl CallMetrics {
    pub fn compute<'a, I>(records: I, service_level_target: Seconds) -> Self
    where
        I: IntoIterator<Item = &'a CallRecord>,
    {
        let calls: Vec<&CallRecord> = records.into_iter().collect();
        let total = calls.len();

        let answered: Vec<&CallRecord> = calls
            .iter()
            .copied()
            .filter(|c| c.is_answered())
            .collect();
        let missed = calls
            .iter()
            .filter(|c| c.queue_name.is_some() && !c.is_answered())
            .count();

        let waits = || answered.iter().filter_map(|c| c.time_to_answer);

        let within_target = waits().filter(|w| *w <= service_level_target).count();

        Self {
            total,
            answered: answered.len(),
            unanswered: total - answered.len(),
            missed,
            missed_pct: percent(missed, total),
            avg_wait: average(waits()),
            max_wait: waits().reduce(f64::max),
            avg_talk_time: average(answered.iter().filter_map(|c| c.talk_time())),
            service_level: percent(within_target, total),
        }
    }
}
