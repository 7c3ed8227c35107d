use super::direction::Direction;
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// Durations are carried as decimal seconds, the unit of the phone export.
pub type Seconds = f64;

/// One call-detail row. Built once by the loader, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallRecord {
    pub call_guid: Option<String>,         // ⇔ CallGUID
    pub direction: Direction,              // ⇔ Direction ('In' | 'Out')
    pub origin_number: Option<String>,     // ⇔ OriginNumber
    pub target_number: Option<String>,     // ⇔ TargetNumber
    pub call_datetime: NaiveDateTime,      // ⇔ CallDateTime
    pub time_to_answer: Option<Seconds>,   // ⇔ TimeToAnswer (empty → None)
    pub call_duration: Seconds,            // ⇔ CallDuration (empty → 0)
    pub hangup_reason: Option<String>,     // ⇔ HangupReason
    pub user_name: Option<String>,         // ⇔ UserName
    pub office_name: Option<String>,       // ⇔ OfficeName
    pub call_alert_name: Option<String>,   // ⇔ CallAlertName
    pub queue_name: Option<String>,        // joined from the queue exports
}

/// Numeric fields that queries and aggregations can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DurationField {
    TimeToAnswer,
    CallDuration,
    /// `call_duration - time_to_answer` for answered calls.
    TalkTime,
}

impl DurationField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationField::TimeToAnswer => "time_to_answer",
            DurationField::CallDuration => "call_duration",
            DurationField::TalkTime => "talk_time",
        }
    }
}

impl CallRecord {
    /// Minimal record; every optional field starts absent.
    pub fn new(direction: Direction, call_datetime: NaiveDateTime) -> Self {
        Self {
            call_guid: None,
            direction,
            origin_number: None,
            target_number: None,
            call_datetime,
            time_to_answer: None,
            call_duration: 0.0,
            hangup_reason: None,
            user_name: None,
            office_name: None,
            call_alert_name: None,
            queue_name: None,
        }
    }

    /// Answered means a positive time to answer. Zero is "not timed".
    pub fn is_answered(&self) -> bool {
        self.time_to_answer.is_some_and(|t| t > 0.0)
    }

    pub fn talk_time(&self) -> Option<Seconds> {
        if !self.is_answered() {
            return None;
        }
        let talk = self.call_duration - self.time_to_answer.unwrap_or(0.0);
        (talk > 0.0).then_some(talk)
    }

    pub fn duration(&self, field: DurationField) -> Option<Seconds> {
        match field {
            DurationField::TimeToAnswer => self.time_to_answer,
            DurationField::CallDuration => Some(self.call_duration),
            DurationField::TalkTime => self.talk_time(),
        }
    }

    /// Origin number usable as caller identity (present and not the "0" placeholder).
    pub fn caller_id(&self) -> Option<&str> {
        self.origin_number
            .as_deref()
            .filter(|n| !n.is_empty() && *n != "0")
    }

    pub fn hour(&self) -> u32 {
        self.call_datetime.hour()
    }

    pub fn get_date_time(&self) -> String {
        self.call_datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
