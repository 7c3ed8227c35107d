//! Call volume per hour of day.

use crate::models::{CallRecord, Direction};
use serde::Serialize;

/// Hours shown by default: the 7am slot through the 6pm slot.
pub const DEFAULT_HOURS: (u32, u32) = (7, 18);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HourlyVolume {
    pub hour: u32,
    pub inbound: usize,
    pub outbound: usize,
}

impl HourlyVolume {
    pub fn total(&self) -> usize {
        self.inbound + self.outbound
    }
}

/// Inbound and outbound calls for every hour in `first..=last`, in hour order.
/// Calls outside the range are not counted.
pub fn hourly_volume<'a, I>(records: I, first: u32, last: u32) -> Vec<HourlyVolume>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let mut rows: Vec<HourlyVolume> = (first..=last)
        .map(|hour| HourlyVolume {
            hour,
            ..Default::default()
        })
        .collect();

    for record in records {
        let hour = record.hour();
        if hour < first || hour > last {
            continue;
        }

        let row = &mut rows[(hour - first) as usize];
        match record.direction {
            Direction::Inbound => row.inbound += 1,
            Direction::Outbound => row.outbound += 1,
        }
    }

    rows
}
