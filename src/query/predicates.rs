//! Composable record predicates.
//!
//! Any `Fn(&CallRecord) -> bool` is a predicate, so ad-hoc closures mix freely
//! with the named constructors below. A predicate that needs a field the record
//! lacks returns `false`.

use crate::models::{CallRecord, Direction, DurationField, Seconds};
use chrono::NaiveDate;

pub trait Predicate {
    fn matches(&self, record: &CallRecord) -> bool;

    fn and<P: Predicate>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
    {
        And(self, other)
    }

    fn or<P: Predicate>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<F> Predicate for F
where
    F: Fn(&CallRecord) -> bool,
{
    fn matches(&self, record: &CallRecord) -> bool {
        self(record)
    }
}

pub struct And<A, B>(A, B);
pub struct Or<A, B>(A, B);
pub struct Not<A>(A);

impl<A: Predicate, B: Predicate> Predicate for And<A, B> {
    fn matches(&self, record: &CallRecord) -> bool {
        self.0.matches(record) && self.1.matches(record)
    }
}

impl<A: Predicate, B: Predicate> Predicate for Or<A, B> {
    fn matches(&self, record: &CallRecord) -> bool {
        self.0.matches(record) || self.1.matches(record)
    }
}

impl<A: Predicate> Predicate for Not<A> {
    fn matches(&self, record: &CallRecord) -> bool {
        !self.0.matches(record)
    }
}

/// Half-open `[lower, upper)` test shared by window filters and histogram buckets.
pub(crate) fn in_window(value: Seconds, lower: Seconds, upper: Seconds) -> bool {
    value >= lower && value < upper
}

pub fn direction_is(direction: Direction) -> impl Predicate {
    move |r: &CallRecord| r.direction == direction
}

/// Inbound with a positive time to answer.
pub fn answered() -> impl Predicate {
    |r: &CallRecord| r.direction.is_inbound() && r.is_answered()
}

/// Inbound without a positive time to answer.
pub fn unanswered() -> impl Predicate {
    |r: &CallRecord| r.direction.is_inbound() && !r.is_answered()
}

pub fn duration_within(field: DurationField, lower: Seconds, upper: Seconds) -> impl Predicate {
    move |r: &CallRecord| r.duration(field).is_some_and(|v| in_window(v, lower, upper))
}

pub fn origin_is(number: impl Into<String>) -> impl Predicate {
    let number = number.into();
    move |r: &CallRecord| r.origin_number.as_deref() == Some(number.as_str())
}

pub fn has_caller_id() -> impl Predicate {
    |r: &CallRecord| r.caller_id().is_some()
}

/// Office name contains any of the patterns (case-insensitive).
pub fn office_matches(patterns: &[String]) -> impl Predicate {
    let patterns: Vec<String> = patterns.iter().map(|p| p.to_lowercase()).collect();
    move |r: &CallRecord| {
        let office = r.office_name.as_deref().unwrap_or("").to_lowercase();
        !office.is_empty() && patterns.iter().any(|p| office.contains(p.as_str()))
    }
}

/// User name equals one of the internal extensions (case-insensitive).
pub fn internal_extension(extensions: &[String]) -> impl Predicate {
    let extensions: Vec<String> = extensions.iter().map(|e| e.to_lowercase()).collect();
    move |r: &CallRecord| {
        r.user_name
            .as_deref()
            .is_some_and(|u| extensions.contains(&u.to_lowercase()))
    }
}

pub fn queue_is(name: impl Into<String>) -> impl Predicate {
    let name = name.into();
    move |r: &CallRecord| r.queue_name.as_deref() == Some(name.as_str())
}

pub fn without_queue() -> impl Predicate {
    |r: &CallRecord| r.queue_name.is_none()
}

/// Call date within `[start, end]`, whole days.
pub fn on_days(start: NaiveDate, end: NaiveDate) -> impl Predicate {
    move |r: &CallRecord| {
        let d = r.call_datetime.date();
        d >= start && d <= end
    }
}
