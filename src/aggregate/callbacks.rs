//! Callback rate and first-contact resolution.

use super::{percent, window};
use crate::models::CallRecord;
use crate::query::{filter, group_by, predicates};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CallbackMetrics {
    pub unique_callers: usize,
    pub callers_with_callback: usize,
    pub callback_rate: f64,
    /// `100 - callback_rate`, zero when there are no callers.
    pub fcr_rate: f64,
}

/// A caller "called back" when two consecutive calls from the same number
/// are at most `window_hours` apart. Calls without a usable caller id are
/// ignored.
pub fn callback_metrics<'a, I>(records: I, window_hours: i64) -> CallbackMetrics
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let valid = filter(records, predicates::has_caller_id());
    let by_caller = group_by(valid, |r| r.caller_id().unwrap_or_default().to_string());

    let max_gap = window(window_hours);
    let unique_callers = by_caller.len();

    let callers_with_callback = by_caller
        .iter()
        .filter(|(_, calls)| {
            let mut times: Vec<_> = calls.iter().map(|c| c.call_datetime).collect();
            times.sort();
            times.windows(2).any(|w| w[1] - w[0] <= max_gap)
        })
        .count();

    let callback_rate = percent(callers_with_callback, unique_callers);
    let fcr_rate = if unique_callers > 0 {
        100.0 - callback_rate
    } else {
        0.0
    };

    CallbackMetrics {
        unique_callers,
        callers_with_callback,
        callback_rate,
        fcr_rate,
    }
}
