//! Weekday by half-hour grids: call volume, waits and missed calls.

use super::{average, percent};
use crate::models::{CallRecord, Seconds};
use crate::query::{Subset, filter};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use clap::ValueEnum;
use serde::Serialize;

/// Monday to Saturday.
pub const DEFAULT_DAYS: [Weekday; 6] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// The 07:30 slot through the 17:30 slot.
pub const DEFAULT_SLOTS: (u32, u32) = (15, 35);

/// Half-hour slot of the day: 0 is 00:00-00:29, 47 is 23:30-23:59.
pub fn half_hour_slot(at: NaiveDateTime) -> u32 {
    at.hour() * 2 + u32::from(at.minute() >= 30)
}

/// Start time of a slot, `07:30`.
pub fn slot_label(slot: u32) -> String {
    format!("{:02}:{:02}", slot / 2, (slot % 2) * 30)
}

/// Records bucketed by weekday and half-hour slot.
#[derive(Debug, Clone)]
pub struct SlotGrid<'a> {
    pub days: Vec<Weekday>,
    pub slots: Vec<u32>,
    /// `cells[slot_index][day_index]`, records in original order.
    cells: Vec<Vec<Subset<'a>>>,
}

impl<'a> SlotGrid<'a> {
    pub fn cell(&self, day: Weekday, slot: u32) -> Option<&Subset<'a>> {
        let d = self.days.iter().position(|x| *x == day)?;
        let s = self.slots.iter().position(|x| *x == slot)?;
        Some(&self.cells[s][d])
    }

    /// Records that landed in some cell.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().map(Vec::len).sum()
    }

    /// Apply `f` to every cell, keeping the `[slot][day]` layout.
    pub fn map<T, F>(&self, f: F) -> Vec<Vec<T>>
    where
        F: Fn(&[&'a CallRecord]) -> T,
    {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| f(cell.as_slice())).collect())
            .collect()
    }
}

/// Bucket records by weekday and slot. Records on other days or outside
/// `first_slot..=last_slot` are left out.
pub fn slot_grid<'a, I>(
    records: I,
    days: &[Weekday],
    first_slot: u32,
    last_slot: u32,
) -> SlotGrid<'a>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let slots: Vec<u32> = (first_slot..=last_slot).collect();
    let mut cells: Vec<Vec<Subset<'a>>> = vec![vec![Vec::new(); days.len()]; slots.len()];

    for record in records {
        let at = record.call_datetime;
        let Some(d) = days.iter().position(|day| *day == at.weekday()) else {
            continue;
        };
        let slot = half_hour_slot(at);
        if slot < first_slot || slot > last_slot {
            continue;
        }
        cells[(slot - first_slot) as usize][d].push(record);
    }

    SlotGrid {
        days: days.to_vec(),
        slots,
        cells,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum HeatmapMetric {
    /// Inbound call count
    CallsIn,
    /// Outbound call count
    CallsOut,
    /// Longest time to answer of answered inbound calls
    MaxWait,
    /// Average time to answer of answered inbound calls
    AvgWait,
    /// Unanswered inbound calls
    Missed,
    /// Unanswered share of inbound calls, in percent
    MissedRate,
}

impl HeatmapMetric {
    pub const ALL: [HeatmapMetric; 6] = [
        HeatmapMetric::CallsIn,
        HeatmapMetric::CallsOut,
        HeatmapMetric::MaxWait,
        HeatmapMetric::AvgWait,
        HeatmapMetric::Missed,
        HeatmapMetric::MissedRate,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            HeatmapMetric::CallsIn => "Inbound calls by half hour",
            HeatmapMetric::CallsOut => "Outbound calls by half hour",
            HeatmapMetric::MaxWait => "Max wait by half hour",
            HeatmapMetric::AvgWait => "Avg wait by half hour",
            HeatmapMetric::Missed => "Missed calls by half hour",
            HeatmapMetric::MissedRate => "Missed rate by half hour",
        }
    }

    fn selects(&self, record: &CallRecord) -> bool {
        match self {
            HeatmapMetric::CallsOut => !record.direction.is_inbound(),
            _ => record.direction.is_inbound(),
        }
    }

    /// Cell value; `None` when the cell has nothing to measure.
    fn value(&self, cell: &[&CallRecord]) -> Option<f64> {
        let waits = || {
            cell.iter()
                .filter(|c| c.is_answered())
                .filter_map(|c| c.time_to_answer)
        };
        let missed = || cell.iter().filter(|c| !c.is_answered()).count();

        match self {
            HeatmapMetric::CallsIn | HeatmapMetric::CallsOut => Some(cell.len() as f64),
            HeatmapMetric::MaxWait => waits().reduce(Seconds::max),
            HeatmapMetric::AvgWait => average(waits()),
            HeatmapMetric::Missed => Some(missed() as f64),
            HeatmapMetric::MissedRate => (!cell.is_empty()).then(|| percent(missed(), cell.len())),
        }
    }
}

/// One metric over the weekday by slot grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub metric: HeatmapMetric,
    pub days: Vec<Weekday>,
    pub slots: Vec<u32>,
    /// `values[slot_index][day_index]`
    pub values: Vec<Vec<Option<f64>>>,
}

impl Heatmap {
    pub fn value(&self, day: Weekday, slot: u32) -> Option<f64> {
        let d = self.days.iter().position(|x| *x == day)?;
        let s = self.slots.iter().position(|x| *x == slot)?;
        self.values[s][d]
    }
}

pub fn heatmap<'a, I>(
    records: I,
    metric: HeatmapMetric,
    days: &[Weekday],
    first_slot: u32,
    last_slot: u32,
) -> Heatmap
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let selected = filter(records, |r: &CallRecord| metric.selects(r));
    let grid = slot_grid(selected, days, first_slot, last_slot);

    Heatmap {
        metric,
        values: grid.map(|cell| metric.value(cell)),
        days: grid.days,
        slots: grid.slots,
    }
}
