use super::average;
use crate::models::{CallRecord, Direction, Seconds};
use crate::query::group_by;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffStats {
    pub name: String,
    pub calls_in: usize,
    pub calls_out: usize,
    pub avg_pickup: Option<Seconds>,
    pub avg_talk_in: Option<Seconds>,
    pub avg_duration_out: Option<Seconds>,
}

impl StaffStats {
    pub fn total_calls(&self) -> usize {
        self.calls_in + self.calls_out
    }
}

/// Per-user figures, busiest first (stable on ties). Calls without a user,
/// or with the "0" placeholder, are not attributed to anyone.
pub fn staff_stats<'a, I>(records: I) -> Vec<StaffStats>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let attributed = records.into_iter().filter(|r| {
        r.user_name
            .as_deref()
            .is_some_and(|u| !u.is_empty() && u != "0")
    });

    let by_user = group_by(attributed, |r| r.user_name.clone().unwrap_or_default());

    let mut out: Vec<StaffStats> = by_user
        .iter()
        .map(|(name, calls)| {
            let inbound = || calls.iter().filter(|c| c.direction == Direction::Inbound);
            let outbound = || calls.iter().filter(|c| c.direction == Direction::Outbound);

            StaffStats {
                name: name.clone(),
                calls_in: inbound().count(),
                calls_out: outbound().count(),
                avg_pickup: average(
                    inbound()
                        .filter(|c| c.is_answered())
                        .filter_map(|c| c.time_to_answer),
                ),
                avg_talk_in: average(inbound().filter_map(|c| c.talk_time())),
                avg_duration_out: average(
                    outbound()
                        .map(|c| c.call_duration)
                        .filter(|d| *d > 0.0),
                ),
            }
        })
        .collect();

    out.sort_by(|a, b| b.total_calls().cmp(&a.total_calls()));
    out
}
