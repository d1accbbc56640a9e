//! Frequency counting with first-seen tie breaking.

use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

/// A distinct value and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

/// Counts occurrences, keeping keys in first-seen order.
fn tally<T, I>(values: I) -> IndexMap<T, usize>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut counts = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// The most frequent value; ties go to the value seen first. `None` when empty.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in tally(values) {
        // strict comparison keeps the earlier value on ties
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Counts per distinct value, most frequent first; equal counts keep first-seen order.
pub fn value_counts<T, I>(values: I) -> Vec<ValueCount<T>>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<ValueCount<T>> = tally(values)
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
