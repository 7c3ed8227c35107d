//! Query engine: subsets of an immutable record sequence.
//!
//! Every operation borrows its input and returns references into it, so a
//! subset can be fed straight into the next filter or into an aggregation.

pub mod predicates;
pub mod scope;

pub use predicates::Predicate;
pub use scope::{DayHours, OpeningHours, QueueFilter, Scope};

use crate::models::{CallRecord, Direction, DurationField, Seconds};
use std::collections::HashMap;
use std::hash::Hash;

/// A filtered view over loaded records, in original order.
pub type Subset<'a> = Vec<&'a CallRecord>;

pub fn filter<'a, I, P>(records: I, predicate: P) -> Subset<'a>
where
    I: IntoIterator<Item = &'a CallRecord>,
    P: Predicate,
{
    records
        .into_iter()
        .filter(|r| predicate.matches(r))
        .collect()
}

pub fn filter_by_direction<'a, I>(records: I, direction: Direction) -> Subset<'a>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    filter(records, predicates::direction_is(direction))
}

/// Inbound calls with `time_to_answer > 0`. Missing or zero values are unanswered.
pub fn filter_answered<'a, I>(records: I) -> Subset<'a>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    filter(records, predicates::answered())
}

pub fn filter_unanswered<'a, I>(records: I) -> Subset<'a>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    filter(records, predicates::unanswered())
}

/// Records whose `field` lies in `[lower, upper)`. Pass `f64::INFINITY` for an
/// open upper bound.
pub fn filter_by_time_window<'a, I>(
    records: I,
    field: DurationField,
    lower: Seconds,
    upper: Seconds,
) -> Subset<'a>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    filter(records, predicates::duration_within(field, lower, upper))
}

/// Records grouped by key, keys in first-seen order.
#[derive(Debug)]
pub struct Groups<'a, K> {
    entries: Vec<(K, Subset<'a>)>,
    index: HashMap<K, usize>,
}

impl<'a, K: Eq + Hash + Clone> Groups<'a, K> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&Subset<'a>> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Subset<'a>)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn into_entries(self) -> Vec<(K, Subset<'a>)> {
        self.entries
    }
}

pub fn group_by<'a, I, K, F>(records: I, key_fn: F) -> Groups<'a, K>
where
    I: IntoIterator<Item = &'a CallRecord>,
    K: Eq + Hash + Clone,
    F: Fn(&CallRecord) -> K,
{
    let mut entries: Vec<(K, Subset<'a>)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for record in records {
        let key = key_fn(record);
        match index.get(&key) {
            Some(&i) => entries[i].1.push(record),
            None => {
                index.insert(key.clone(), entries.len());
                entries.push((key, vec![record]));
            }
        }
    }

    Groups { entries, index }
}
