// src/loader/csv_source.rs

use super::queue::QueueMap;
use super::timestamp::parse_call_datetime;
use super::RecordLoader;
use crate::errors::LoadError;
use crate::models::{CallRecord, Direction, ParsedDirection, Seconds};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Column headers of the phone system's "Data In and Out" export.
pub(crate) mod columns {
    pub const CALL_GUID: &str = "CallGUID";
    pub const DIRECTION: &str = "Direction";
    pub const ORIGIN_NUMBER: &str = "OriginNumber";
    pub const TARGET_NUMBER: &str = "TargetNumber";
    pub const CALL_DATETIME: &str = "CallDateTime";
    pub const TIME_TO_ANSWER: &str = "TimeToAnswer";
    pub const CALL_DURATION: &str = "CallDuration";
    pub const HANGUP_REASON: &str = "HangupReason";
    pub const USER_NAME: &str = "UserName";
    pub const OFFICE_NAME: &str = "OfficeName";
    pub const CALL_ALERT_NAME: &str = "CallAlertName";
}

/// Loads call records from a CSV export on disk.
pub struct CsvLoader {
    path: PathBuf,
    queues: QueueMap,
}

impl CsvLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            queues: QueueMap::new(),
        }
    }

    /// Attach queue names (by CallGUID) while loading.
    pub fn with_queues(mut self, queues: QueueMap) -> Self {
        self.queues = queues;
        self
    }
}

impl RecordLoader for CsvLoader {
    fn load(&self) -> Result<Vec<CallRecord>, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::Unreadable {
            path: self.path.display().to_string(),
            source,
        })?;

        let records = parse_records(file, &self.queues)?;
        info!(
            path = %self.path.display(),
            records = records.len(),
            "loaded call export"
        );
        Ok(records)
    }
}

/// Header positions resolved once per file. Unknown columns are ignored.
struct ColumnIndex {
    call_guid: Option<usize>,
    direction: usize,
    origin_number: Option<usize>,
    target_number: Option<usize>,
    call_datetime: usize,
    time_to_answer: Option<usize>,
    call_duration: Option<usize>,
    hangup_reason: Option<usize>,
    user_name: Option<usize>,
    office_name: Option<usize>,
    call_alert_name: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require =
            |name: &str| find(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()));

        Ok(Self {
            call_guid: find(columns::CALL_GUID),
            direction: require(columns::DIRECTION)?,
            origin_number: find(columns::ORIGIN_NUMBER),
            target_number: find(columns::TARGET_NUMBER),
            call_datetime: require(columns::CALL_DATETIME)?,
            time_to_answer: find(columns::TIME_TO_ANSWER),
            call_duration: find(columns::CALL_DURATION),
            hangup_reason: find(columns::HANGUP_REASON),
            user_name: find(columns::USER_NAME),
            office_name: find(columns::OFFICE_NAME),
            call_alert_name: find(columns::CALL_ALERT_NAME),
        })
    }
}

/// Parse a whole export. Rows keep their file order; internal legs are skipped.
pub fn parse_records<R: Read>(reader: R, queues: &QueueMap) -> Result<Vec<CallRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let idx = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    let mut skipped_internal = 0usize;

    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        let row_no = i + 1;

        match parse_row(&row, row_no, &idx, queues)? {
            Some(rec) => records.push(rec),
            None => skipped_internal += 1,
        }
    }

    if skipped_internal > 0 {
        debug!(skipped_internal, "skipped internal-to-internal rows");
    }

    if !queues.is_empty() {
        let queued = records.iter().filter(|r| r.queue_name.is_some()).count();
        if queued == 0 {
            warn!("no call matched any queue export; check the CallGUID column");
        } else {
            debug!(queued, "calls matched to queues");
        }
    }

    Ok(records)
}

fn parse_row(
    row: &StringRecord,
    row_no: usize,
    idx: &ColumnIndex,
    queues: &QueueMap,
) -> Result<Option<CallRecord>, LoadError> {
    let raw_direction = cell(row, Some(idx.direction)).unwrap_or_default();
    let direction = match Direction::parse_export(&raw_direction) {
        Some(ParsedDirection::Call(d)) => d,
        Some(ParsedDirection::Internal) => return Ok(None),
        None => {
            return Err(LoadError::UnknownDirection {
                row: row_no,
                value: raw_direction,
            });
        }
    };

    let raw_dt = cell(row, Some(idx.call_datetime)).unwrap_or_default();
    let call_datetime =
        parse_call_datetime(&raw_dt).ok_or_else(|| LoadError::MalformedTimestamp {
            row: row_no,
            value: raw_dt.clone(),
        })?;

    let time_to_answer = duration_cell(row, row_no, idx.time_to_answer, columns::TIME_TO_ANSWER)?;
    let call_duration =
        duration_cell(row, row_no, idx.call_duration, columns::CALL_DURATION)?.unwrap_or(0.0);

    let call_guid = cell(row, idx.call_guid);
    let queue_name = call_guid.as_ref().and_then(|g| queues.get(g)).cloned();

    Ok(Some(CallRecord {
        call_guid,
        direction,
        origin_number: cell(row, idx.origin_number),
        target_number: cell(row, idx.target_number),
        call_datetime,
        time_to_answer,
        call_duration,
        hangup_reason: cell(row, idx.hangup_reason),
        user_name: cell(row, idx.user_name),
        office_name: cell(row, idx.office_name),
        call_alert_name: cell(row, idx.call_alert_name),
        queue_name,
    }))
}

/// Trimmed, non-empty cell value.
fn cell(row: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn duration_cell(
    row: &StringRecord,
    row_no: usize,
    idx: Option<usize>,
    column: &str,
) -> Result<Option<Seconds>, LoadError> {
    let Some(raw) = cell(row, idx) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(LoadError::MalformedDuration {
            row: row_no,
            column: column.to_string(),
            value: raw,
        }),
    }
}
