// src/report/tables.rs

use super::ReportTable;
use crate::aggregate::callbacks::CallbackMetrics;
use crate::aggregate::followup::Followup;
use crate::aggregate::heatmap::slot_label;
use crate::aggregate::{
    CallMetrics, Extreme, FrequencyTable, Heatmap, HeatmapMetric, Histogram, HourlyVolume,
    QueueRow, StaffStats, WeeklyAverage, WeeklyMetrics,
};
use crate::utils::date::weekday_short;
use crate::utils::formatting::{hour_slot, pct};
use crate::utils::time::{format_secs, format_secs_short};
use chrono::Weekday;
use std::hash::Hash;

/// One row per labelled slice (site, queue…) of call metrics.
pub fn metrics_table(
    title: &str,
    slice_header: &str,
    rows: &[(String, CallMetrics)],
) -> ReportTable {
    let mut t = ReportTable::new(
        title,
        &[
            slice_header,
            "Total",
            "Answered",
            "Missed",
            "Missed %",
            "Avg wait",
            "Max wait",
            "Avg call",
        ],
    );

    for (label, m) in rows {
        t.push(&[
            label.clone(),
            m.total.to_string(),
            m.answered.to_string(),
            m.missed.to_string(),
            pct(m.missed_pct),
            format_secs(m.avg_wait),
            format_secs(m.max_wait),
            format_secs(m.avg_talk_time),
        ]);
    }
    t
}

pub fn summary_table(m: &CallMetrics, cb: &CallbackMetrics, out_of_hours: usize) -> ReportTable {
    let mut t = ReportTable::new("Summary", &["Metric", "Value"]);
    t.push(&["Total calls".to_string(), m.total.to_string()]);
    t.push(&["Answered".to_string(), m.answered.to_string()]);
    t.push(&["Missed (queued, unanswered)".to_string(), m.missed.to_string()]);
    t.push(&["Missed %".to_string(), pct(m.missed_pct)]);
    t.push(&["Service level".to_string(), pct(m.service_level)]);
    t.push(&["First contact resolution".to_string(), pct(cb.fcr_rate)]);
    t.push(&["Callback rate".to_string(), pct(cb.callback_rate)]);
    t.push(&["Avg wait".to_string(), format_secs(m.avg_wait)]);
    t.push(&["Max wait".to_string(), format_secs(m.max_wait)]);
    t.push(&["Avg call length".to_string(), format_secs(m.avg_talk_time)]);
    t.push(&["Out of hours (inbound)".to_string(), out_of_hours.to_string()]);
    t
}

/// Weekday columns Mon..Sun plus the whole week.
pub fn weekday_table(
    title: &str,
    days: &[(Weekday, CallMetrics)],
    week: &CallMetrics,
) -> ReportTable {
    let mut headers: Vec<String> = vec!["Metric".to_string()];
    headers.extend(days.iter().map(|(d, _)| weekday_short(*d).to_string()));
    headers.push("Week".to_string());

    let mut t = ReportTable::new(title, headers.as_slice());

    let all: Vec<&CallMetrics> = days
        .iter()
        .map(|(_, m)| m)
        .chain(std::iter::once(week))
        .collect();

    t.push(weekday_row("Total Calls", &all, |m| m.total.to_string()));
    t.push(weekday_row("Answered", &all, |m| m.answered.to_string()));
    t.push(weekday_row("Missed", &all, |m| m.unanswered.to_string()));
    t.push(weekday_row("Missed %", &all, |m| {
        if m.total == 0 {
            "-".to_string()
        } else {
            pct(m.unanswered as f64 / m.total as f64 * 100.0)
        }
    }));
    t.push(weekday_row("Avg Wait", &all, |m| format_secs_short(m.avg_wait)));
    t.push(weekday_row("Max Wait", &all, |m| format_secs_short(m.max_wait)));
    t.push(weekday_row("Avg Call", &all, |m| format_secs_short(m.avg_talk_time)));
    t
}

fn weekday_row<F>(label: &str, all: &[&CallMetrics], f: F) -> Vec<String>
where
    F: Fn(&CallMetrics) -> String,
{
    std::iter::once(label.to_string())
        .chain(all.iter().map(|&m| f(m)))
        .collect()
}

/// Buckets with count and share of the bucketed records, then the excluded count.
pub fn histogram_table(title: &str, h: &Histogram) -> ReportTable {
    let mut t = ReportTable::new(title, &["Bucket", "Count", "Share"]);
    let bucketed = h.bucketed();

    for b in &h.buckets {
        let share = if bucketed == 0 {
            0.0
        } else {
            b.count as f64 / bucketed as f64 * 100.0
        };
        t.push(&[b.label.clone(), b.count.to_string(), format!("{share:.0}%")]);
    }

    t.push(&["excluded".to_string(), h.excluded.to_string(), "-".to_string()]);
    t
}

pub fn frequency_table<K, F>(
    title: &str,
    key_header: &str,
    entries: &[(&K, usize)],
    label: F,
) -> ReportTable
where
    K: Eq + Hash + Clone,
    F: Fn(&K) -> String,
{
    let mut t = ReportTable::new(title, &[key_header, "Count"]);
    for &(k, c) in entries {
        t.push(&[label(k), c.to_string()]);
    }
    t
}

/// Value counts of a table, largest first.
pub fn value_counts_table<K, F>(
    title: &str,
    key_header: &str,
    freq: &FrequencyTable<K>,
    label: F,
) -> ReportTable
where
    K: Eq + Hash + Clone,
    F: Fn(&K) -> String,
{
    frequency_table(title, key_header, &freq.sorted(), label)
}

/// Every record holding an extreme value.
pub fn ties_table(title: &str, e: &Extreme<'_>) -> ReportTable {
    let mut t = ReportTable::new(
        title,
        &["CallDateTime", "UserName", "TimeToAnswer", "CallDuration"],
    );
    for r in &e.ties {
        t.push(&[
            r.get_date_time(),
            r.user_name.clone().unwrap_or_default(),
            format!("{}", r.time_to_answer.unwrap_or(0.0)),
            format!("{}", r.call_duration),
        ]);
    }
    t
}

pub fn staff_table(rows: &[StaffStats]) -> ReportTable {
    let mut t = ReportTable::new(
        "Staff",
        &[
            "Name",
            "In",
            "Out",
            "Total",
            "Avg pickup",
            "Avg call in",
            "Avg call out",
        ],
    );
    for s in rows {
        t.push(&[
            s.name.clone(),
            s.calls_in.to_string(),
            s.calls_out.to_string(),
            s.total_calls().to_string(),
            format_secs(s.avg_pickup),
            format_secs(s.avg_talk_in),
            format_secs(s.avg_duration_out),
        ]);
    }
    t
}

pub fn queue_table(rows: &[QueueRow]) -> ReportTable {
    let mut t = ReportTable::new(
        "Missed calls by queue",
        &["Queue", "Total Calls", "Answered", "Missed", "Miss Rate"],
    );
    for q in rows {
        t.push(&[
            q.queue.clone(),
            q.total.to_string(),
            q.answered.to_string(),
            q.missed.to_string(),
            pct(q.miss_rate),
        ]);
    }
    t
}

pub fn followup_tables(f: &Followup) -> Vec<ReportTable> {
    let mut summary = ReportTable::new("Missed call follow-up", &["Metric", "Value"]);
    summary.push(&["Lost opportunities".to_string(), f.lost.to_string()]);
    summary.push(&["Persistent callers".to_string(), f.persistent.to_string()]);
    summary.push(&[
        "Avg attempts".to_string(),
        f.avg_attempts
            .map(|a| format!("{a:.1}"))
            .unwrap_or_else(|| "-".to_string()),
    ]);
    summary.push(&[
        "Avg wait before hang-up".to_string(),
        format_secs(f.avg_wait_before_hangup),
    ]);

    let mut attempts = ReportTable::new("Attempts until answered", &["Attempts", "Callers"]);
    attempts.push(&["1".to_string(), f.attempts.one.to_string()]);
    attempts.push(&["2".to_string(), f.attempts.two.to_string()]);
    attempts.push(&["3+".to_string(), f.attempts.three_or_more.to_string()]);

    let mut peaks = ReportTable::new("Lost opportunities by hour", &["Hour", "Lost"]);
    for (hour, count) in f.peak_lost_hours(5) {
        peaks.push(&[hour_slot(hour), count.to_string()]);
    }

    vec![summary, attempts, peaks]
}

/// Calls per hour, then the column totals.
pub fn hourly_table(rows: &[HourlyVolume]) -> ReportTable {
    let mut t = ReportTable::new("Calls by hour", &["Hour", "In", "Out", "Total"]);
    for r in rows {
        t.push(&[
            hour_slot(r.hour),
            r.inbound.to_string(),
            r.outbound.to_string(),
            r.total().to_string(),
        ]);
    }

    let inbound: usize = rows.iter().map(|r| r.inbound).sum();
    let outbound: usize = rows.iter().map(|r| r.outbound).sum();
    t.push(&[
        "Total".to_string(),
        inbound.to_string(),
        outbound.to_string(),
        (inbound + outbound).to_string(),
    ]);
    t
}

/// One row per half-hour slot, one column per weekday.
pub fn heatmap_table(h: &Heatmap) -> ReportTable {
    let mut headers: Vec<String> = vec!["Time".to_string()];
    headers.extend(h.days.iter().map(|d| weekday_short(*d).to_string()));

    let mut t = ReportTable::new(h.metric.title(), headers.as_slice());
    for (slot, values) in h.slots.iter().zip(&h.values) {
        let row = std::iter::once(slot_label(*slot))
            .chain(values.iter().map(|v| heat_cell(h.metric, *v)));
        t.push(row);
    }
    t
}

fn heat_cell(metric: HeatmapMetric, value: Option<f64>) -> String {
    match (metric, value) {
        (_, None) => "-".to_string(),
        (HeatmapMetric::MaxWait | HeatmapMetric::AvgWait, v) => format_secs_short(v),
        (HeatmapMetric::MissedRate, Some(v)) => format!("{v:.0}%"),
        (_, Some(v)) => format!("{v:.0}"),
    }
}

/// Inbound metrics per week, then the per-week average over several weeks.
pub fn weekly_table(trend: &[WeeklyMetrics], average: Option<&WeeklyAverage>) -> ReportTable {
    let mut t = ReportTable::new(
        "Weekly trend",
        &[
            "Week of",
            "Total",
            "Answered",
            "Missed",
            "Missed %",
            "Avg wait",
            "Service level",
        ],
    );

    for w in trend {
        let m = &w.metrics;
        t.push(&[
            w.week.label(),
            m.total.to_string(),
            m.answered.to_string(),
            m.missed.to_string(),
            pct(m.missed_pct),
            format_secs(m.avg_wait),
            pct(m.service_level),
        ]);
    }

    if let Some(avg) = average.filter(|a| a.weeks > 1) {
        t.push(&[
            format!("Average ({} weeks)", avg.weeks),
            format!("{:.1}", avg.total),
            format!("{:.1}", avg.answered),
            format!("{:.1}", avg.missed),
            "-".to_string(),
            "-".to_string(),
            "-".to_string(),
        ]);
    }
    t
}
