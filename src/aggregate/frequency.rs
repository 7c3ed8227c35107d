use crate::models::CallRecord;
use crate::query::group_by;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts per key, keys in first-seen order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn entries(&self) -> &[(K, usize)] {
        &self.entries
    }

    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts; equals the size of the counted subset.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn get(&self, key: &K) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// All entries by count descending; equal counts keep first-seen order.
    pub fn sorted(&self) -> Vec<(&K, usize)> {
        let mut out: Vec<(&K, usize)> = self.entries.iter().map(|(k, c)| (k, *c)).collect();
        // sort_by is stable
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    /// Keys seen more than once, ordered like `sorted`.
    pub fn repeats(&self) -> Vec<(&K, usize)> {
        self.sorted().into_iter().filter(|(_, c)| *c > 1).collect()
    }
}

pub fn frequency_count<'a, I, K, F>(records: I, key_fn: F) -> FrequencyTable<K>
where
    I: IntoIterator<Item = &'a CallRecord>,
    K: Eq + Hash + Clone,
    F: Fn(&CallRecord) -> K,
{
    let entries = group_by(records, key_fn)
        .into_entries()
        .into_iter()
        .map(|(k, group)| (k, group.len()))
        .collect();

    FrequencyTable { entries }
}

/// Same counting over plain values, e.g. a raw column from the inventory.
pub fn count_values<I, K>(values: I) -> FrequencyTable<K>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash + Clone,
{
    let mut entries: Vec<(K, usize)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for v in values {
        match index.get(&v) {
            Some(&i) => entries[i].1 += 1,
            None => {
                index.insert(v.clone(), entries.len());
                entries.push((v, 1));
            }
        }
    }

    FrequencyTable { entries }
}
