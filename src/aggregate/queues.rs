use super::percent;
use crate::models::{CallRecord, Direction};
use crate::query::{filter, filter_by_direction, predicates};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueRow {
    pub queue: String,
    pub total: usize,
    pub answered: usize,
    pub missed: usize,
    pub miss_rate: f64,
}

impl QueueRow {
    fn from_calls(queue: &str, calls: &[&CallRecord]) -> Self {
        let total = calls.len();
        let missed = calls.iter().filter(|c| !c.is_answered()).count();
        Self {
            queue: queue.to_string(),
            total,
            answered: total - missed,
            missed,
            miss_rate: percent(missed, total),
        }
    }

    fn sum(label: &str, rows: &[QueueRow]) -> Self {
        let total: usize = rows.iter().map(|r| r.total).sum();
        let answered: usize = rows.iter().map(|r| r.answered).sum();
        let missed: usize = rows.iter().map(|r| r.missed).sum();
        Self {
            queue: label.to_string(),
            total,
            answered,
            missed,
            miss_rate: percent(missed, total),
        }
    }
}

/// Inbound calls per named queue, then "No Queue", then "TOTAL".
pub fn queue_breakdown<'a, I>(records: I, queues: &[String]) -> Vec<QueueRow>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let inbound = filter_by_direction(records, Direction::Inbound);

    let mut rows: Vec<QueueRow> = queues
        .iter()
        .map(|q| {
            let calls = filter(inbound.iter().copied(), predicates::queue_is(q.clone()));
            QueueRow::from_calls(q, &calls)
        })
        .collect();

    let unqueued = filter(inbound.iter().copied(), predicates::without_queue());
    rows.push(QueueRow::from_calls("No Queue", &unqueued));

    let total = QueueRow::sum("TOTAL", &rows);
    rows.push(total);
    rows
}
