//! Aggregations over a record subset.

pub mod callbacks;
pub mod frequency;
pub mod followup;
pub mod heatmap;
pub mod histogram;
pub mod hourly;
pub mod metrics;
pub mod queues;
pub mod staff;
pub mod weekly;

pub use callbacks::{CallbackMetrics, callback_metrics};
pub use frequency::{FrequencyTable, count_values, frequency_count};
pub use followup::{Followup, missed_call_followup};
pub use heatmap::{Heatmap, HeatmapMetric, SlotGrid, heatmap, slot_grid};
pub use histogram::{Bucket, Histogram, histogram};
pub use hourly::{HourlyVolume, hourly_volume};
pub use metrics::CallMetrics;
pub use queues::{QueueRow, queue_breakdown};
pub use staff::{StaffStats, staff_stats};
pub use weekly::{Week, WeeklyAverage, WeeklyMetrics, weekly_average, weekly_trend, weeks_in};

use crate::errors::{AppError, AppResult};
use crate::models::{CallRecord, DurationField, Seconds};
use chrono::Duration;

/// Longest callback or follow-up window: one leap year.
pub const MAX_WINDOW_HOURS: i64 = 24 * 366;

pub fn count<'a, I>(records: I) -> usize
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    records.into_iter().count()
}

/// Extreme value of a field and every record holding it, in original order.
#[derive(Debug, Clone)]
pub struct Extreme<'a> {
    pub value: Seconds,
    pub ties: Vec<&'a CallRecord>,
}

/// Minimum of `field`. Records without the field are ignored; with nothing
/// left the result is `EmptyInput`, never a sentinel.
pub fn min_by<'a, I>(records: I, field: DurationField) -> AppResult<Extreme<'a>>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    extreme_by(records, field, |candidate, best| candidate < best, "min_by")
}

pub fn max_by<'a, I>(records: I, field: DurationField) -> AppResult<Extreme<'a>>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    extreme_by(records, field, |candidate, best| candidate > best, "max_by")
}

fn extreme_by<'a, I, F>(
    records: I,
    field: DurationField,
    better: F,
    op: &str,
) -> AppResult<Extreme<'a>>
where
    I: IntoIterator<Item = &'a CallRecord>,
    F: Fn(Seconds, Seconds) -> bool,
{
    let mut best: Option<Extreme<'a>> = None;

    for record in records {
        let Some(value) = record.duration(field) else {
            continue;
        };

        match best.as_mut() {
            None => {
                best = Some(Extreme {
                    value,
                    ties: vec![record],
                })
            }
            Some(b) if better(value, b.value) => {
                b.value = value;
                b.ties.clear();
                b.ties.push(record);
            }
            Some(b) if value == b.value => b.ties.push(record),
            Some(_) => {}
        }
    }

    best.ok_or_else(|| AppError::EmptyInput(format!("{op}({})", field.as_str())))
}

/// Arithmetic mean of the present values, `None` when there are none.
pub fn mean_by<'a, I>(records: I, field: DurationField) -> Option<Seconds>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    average(records.into_iter().filter_map(|r| r.duration(field)))
}

/// Calculate the average of an iterator of f64
pub(crate) fn average<I: Iterator<Item = f64>>(iter: I) -> Option<f64> {
    let (sum, count) = iter.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Window length in hours, clamped to `0..=MAX_WINDOW_HOURS`.
pub(crate) fn window(hours: i64) -> Duration {
    Duration::hours(hours.clamp(0, MAX_WINDOW_HOURS))
}

/// `part / whole * 100`, zero when `whole` is zero.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
