//! Report builders: one function per analysis, each returning the finished
//! tables so the console and the exporters share the same output.

use crate::aggregate::heatmap::{DEFAULT_DAYS, DEFAULT_SLOTS};
use crate::aggregate::hourly::DEFAULT_HOURS;
use crate::aggregate::{
    CallMetrics, Extreme, HeatmapMetric, callback_metrics, count, frequency_count, heatmap,
    histogram, hourly_volume, max_by, mean_by, min_by, missed_call_followup, percent,
    queue_breakdown, staff_stats, weekly_average, weekly_trend,
};
use crate::core::analysis::Analysis;
use crate::errors::{AppError, AppResult};
use crate::models::{CallRecord, Direction, DurationField, Seconds};
use crate::query::{
    Predicate, filter, filter_answered, filter_by_direction, filter_unanswered, group_by,
    predicates,
};
use crate::report::ReportTable;
use crate::report::tables::{
    followup_tables, frequency_table, heatmap_table, histogram_table, hourly_table, metrics_table,
    queue_table, staff_table, summary_table, ties_table, value_counts_table, weekday_table,
    weekly_table,
};
use crate::utils::date::WEEK;
use crate::utils::formatting::{label_or_none, pct};
use crate::utils::time::format_secs;
use chrono::Datelike;

/// Repeat callers listed by `all`.
const DEFAULT_TOP: usize = 10;

pub struct ReportLogic;

impl ReportLogic {
    /// Headline service figures over inbound calls.
    pub fn summary(a: &Analysis) -> Vec<ReportTable> {
        let scoped = a.scoped();
        let inbound = filter_by_direction(scoped, Direction::Inbound);

        let metrics = CallMetrics::compute(
            inbound.iter().copied(),
            a.config.service_level_target_secs,
        );
        let callbacks = callback_metrics(inbound.iter().copied(), a.config.callback_window_hours);

        vec![summary_table(&metrics, &callbacks, a.out_of_hours())]
    }

    /// Answered-call count, fastest pickups (all ties) and the pickup histogram.
    pub fn pickup(a: &Analysis, boundaries: &[Seconds]) -> AppResult<Vec<ReportTable>> {
        let answered = filter_answered(a.scoped());
        let field = DurationField::TimeToAnswer;

        let fastest = optional(min_by(answered.iter().copied(), field))?;
        let slowest = optional(max_by(answered.iter().copied(), field))?;

        let mut overview = ReportTable::new("Pickup times", &["Metric", "Value"]);
        overview.push(&[
            "Answered calls".to_string(),
            count(answered.iter().copied()).to_string(),
        ]);
        overview.push(&[
            "Fastest pickup".to_string(),
            format_secs(fastest.as_ref().map(|e| e.value)),
        ]);
        overview.push(&[
            "Slowest pickup".to_string(),
            format_secs(slowest.as_ref().map(|e| e.value)),
        ]);
        overview.push(&[
            "Average pickup".to_string(),
            format_secs(mean_by(answered.iter().copied(), field)),
        ]);

        let mut tables = vec![overview];
        if let Some(e) = &fastest {
            tables.push(ties_table("Fastest pickups", e));
        }

        let h = histogram(answered.iter().copied(), field, boundaries)?;
        tables.push(histogram_table("Pickup time distribution", &h));

        Ok(tables)
    }

    /// Inbound callers by origin number, repeats first.
    pub fn repeats(a: &Analysis, top: usize) -> Vec<ReportTable> {
        let callers = filter(
            a.scoped(),
            predicates::direction_is(Direction::Inbound).and(predicates::has_caller_id()),
        );
        let freq = frequency_count(callers, |r| r.caller_id().unwrap_or_default().to_string());
        let repeats = freq.repeats();

        let mut overview = ReportTable::new("Repeat callers", &["Metric", "Value"]);
        overview.push(&["Inbound calls with caller id".to_string(), freq.total().to_string()]);
        overview.push(&["Unique callers".to_string(), freq.distinct().to_string()]);
        overview.push(&["Repeat callers".to_string(), repeats.len().to_string()]);
        overview.push(&[
            "Calls from repeat callers".to_string(),
            repeats.iter().map(|(_, c)| c).sum::<usize>().to_string(),
        ]);

        let shown = &repeats[..top.min(repeats.len())];
        let top_table =
            frequency_table("Top repeat callers", "Caller", shown, |k: &String| k.clone());

        vec![overview, top_table]
    }

    pub fn hangups(a: &Analysis) -> Vec<ReportTable> {
        let freq = frequency_count(a.scoped(), |r| r.hangup_reason.clone());
        vec![value_counts_table(
            "Hangup reasons",
            "HangupReason",
            &freq,
            |k: &Option<String>| label_or_none(k.as_deref()),
        )]
    }

    /// Unanswered inbound calls and how long callers waited before hanging up.
    pub fn abandoned(a: &Analysis, boundaries: &[Seconds]) -> AppResult<Vec<ReportTable>> {
        let scoped = a.scoped();
        let inbound = count(scoped.iter().copied().filter(|r| r.direction.is_inbound()));
        let abandoned = filter_unanswered(scoped);
        let field = DurationField::CallDuration;

        let mut overview = ReportTable::new("Abandoned calls", &["Metric", "Value"]);
        overview.push(&["Inbound calls".to_string(), inbound.to_string()]);
        overview.push(&["Abandoned".to_string(), abandoned.len().to_string()]);
        overview.push(&[
            "Abandon rate".to_string(),
            pct(percent(abandoned.len(), inbound)),
        ]);
        overview.push(&[
            "Avg wait before hang-up".to_string(),
            format_secs(mean_by(abandoned.iter().copied(), field)),
        ]);

        let h = histogram(abandoned.iter().copied(), field, boundaries)?;
        Ok(vec![overview, histogram_table("Wait before hang-up", &h)])
    }

    /// Inbound metrics per configured site, then all sites together.
    pub fn sites(a: &Analysis) -> Vec<ReportTable> {
        let inbound = filter_by_direction(a.scoped(), Direction::Inbound);
        let target = a.config.service_level_target_secs;

        let mut rows: Vec<(String, CallMetrics)> = a
            .config
            .sites
            .iter()
            .map(|site| {
                let calls = filter(
                    inbound.iter().copied(),
                    predicates::office_matches(&site.patterns),
                );
                (site.name.clone(), CallMetrics::compute(calls, target))
            })
            .collect();
        rows.push((
            "All sites".to_string(),
            CallMetrics::compute(inbound.iter().copied(), target),
        ));

        vec![metrics_table("Calls by site", "Site", &rows)]
    }

    /// Metrics per weekday, Monday first, for one direction.
    pub fn daily(a: &Analysis, direction: Direction) -> Vec<ReportTable> {
        let calls = filter_by_direction(a.scoped(), direction);
        let target = a.config.service_level_target_secs;
        let by_day = group_by(calls.iter().copied(), |r: &CallRecord| r.call_datetime.weekday());

        let days: Vec<_> = WEEK
            .iter()
            .map(|d| {
                let day_calls = by_day.get(d).map(|g| g.as_slice()).unwrap_or(&[]);
                (*d, CallMetrics::compute(day_calls.iter().copied(), target))
            })
            .collect();
        let week = CallMetrics::compute(calls.iter().copied(), target);

        let title = match direction {
            Direction::Inbound => "Inbound calls by weekday",
            Direction::Outbound => "Outbound calls by weekday",
        };
        vec![weekday_table(title, &days, &week)]
    }

    /// Inbound and outbound calls per hour of the working day.
    pub fn hourly(a: &Analysis) -> Vec<ReportTable> {
        let (first, last) = DEFAULT_HOURS;
        vec![hourly_table(&hourly_volume(a.scoped(), first, last))]
    }

    /// One weekday by half-hour grid for `metric`.
    pub fn heatmap(a: &Analysis, metric: HeatmapMetric) -> Vec<ReportTable> {
        let (first, last) = DEFAULT_SLOTS;
        let grid = heatmap(a.scoped(), metric, &DEFAULT_DAYS, first, last);
        vec![heatmap_table(&grid)]
    }

    /// Inbound metrics per Monday-to-Sunday week.
    pub fn weekly(a: &Analysis) -> Vec<ReportTable> {
        let trend = weekly_trend(a.scoped(), a.config.service_level_target_secs);
        let average = weekly_average(&trend);
        vec![weekly_table(&trend, average.as_ref())]
    }

    pub fn queues(a: &Analysis) -> Vec<ReportTable> {
        vec![queue_table(&queue_breakdown(a.scoped(), &a.config.queues))]
    }

    pub fn staff(a: &Analysis) -> Vec<ReportTable> {
        vec![staff_table(&staff_stats(a.scoped()))]
    }

    pub fn followup(a: &Analysis) -> Vec<ReportTable> {
        followup_tables(&missed_call_followup(a.scoped(), a.config.callback_window_hours))
    }

    /// Every report, in console order, for a full export.
    pub fn all(a: &Analysis) -> AppResult<Vec<ReportTable>> {
        let cfg = &a.config;
        let mut tables = Self::summary(a);
        tables.extend(Self::pickup(a, &cfg.pickup_boundaries)?);
        tables.extend(Self::repeats(a, DEFAULT_TOP));
        tables.extend(Self::hangups(a));
        tables.extend(Self::abandoned(a, &cfg.abandon_boundaries)?);
        tables.extend(Self::sites(a));
        tables.extend(Self::daily(a, Direction::Inbound));
        tables.extend(Self::daily(a, Direction::Outbound));
        tables.extend(Self::hourly(a));
        for metric in HeatmapMetric::ALL {
            tables.extend(Self::heatmap(a, metric));
        }
        tables.extend(Self::weekly(a));
        tables.extend(Self::queues(a));
        tables.extend(Self::staff(a));
        tables.extend(Self::followup(a));
        Ok(tables)
    }
}

/// An extreme over no values is an empty report section, not a failure.
fn optional(res: AppResult<Extreme<'_>>) -> AppResult<Option<Extreme<'_>>> {
    match res {
        Ok(e) => Ok(Some(e)),
        Err(AppError::EmptyInput(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
