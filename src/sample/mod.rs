//! Raw-data browsing: random batches drawn without replacement.
//!
//! A session starts with a copy of the filtered rows and hands each row out
//! exactly once. Once the last row has been returned the session is exhausted.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

use crate::dataset::{Dataset, TripRecord};
use crate::{BikeshareError, Result};

pub const MIN_SAMPLE_SIZE: usize = 1;
pub const MAX_SAMPLE_SIZE: usize = 20;
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Checks that `size` is within `1..=20`.
///
/// # Errors
/// Returns `InvalidSampleSize` otherwise.
pub fn validate_sample_size(size: usize) -> Result<usize> {
    if size >= MIN_SAMPLE_SIZE && size <= MAX_SAMPLE_SIZE {
        Ok(size)
    } else {
        Err(BikeshareError::InvalidSampleSize(size))
    }
}

/// One batch handed out by [`SampleSession::next_sample`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBatch {
    /// Rows in source order.
    pub rows: Vec<TripRecord>,
    /// Rows still available after this batch.
    pub remaining: usize,
    /// True on the batch that emptied the session, and on every call after it.
    pub exhausted: bool,
}

#[derive(Debug)]
pub struct SampleSession {
    remaining: Vec<TripRecord>,
    sample_size: usize,
    exhausted: bool,
    rng: StdRng,
}

impl SampleSession {
    /// Starts a session seeded from system entropy.
    ///
    /// # Errors
    /// Returns `InvalidSampleSize` if `sample_size` is outside `1..=20`.
    pub fn new(dataset: &Dataset, sample_size: usize) -> Result<Self> {
        Self::with_rng(dataset, sample_size, StdRng::from_entropy())
    }

    /// Starts a session whose draws are reproducible for a given seed.
    ///
    /// # Errors
    /// Returns `InvalidSampleSize` if `sample_size` is outside `1..=20`.
    pub fn with_seed(dataset: &Dataset, sample_size: usize, seed: u64) -> Result<Self> {
        Self::with_rng(dataset, sample_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dataset: &Dataset, sample_size: usize, rng: StdRng) -> Result<Self> {
        Ok(Self {
            remaining: dataset.records().to_vec(),
            sample_size: validate_sample_size(sample_size)?,
            exhausted: false,
            rng,
        })
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    #[cfg(test)]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Draws the next batch.
    ///
    /// Returns `sample_size` rows while enough remain, then whatever is left.
    pub fn next_sample(&mut self) -> SampleBatch {
        if self.remaining.is_empty() {
            self.exhausted = true;
            return self.batch(Vec::new());
        }

        let rows = if self.remaining.len() <= self.sample_size {
            std::mem::take(&mut self.remaining)
        } else {
            let mut picked = index::sample(&mut self.rng, self.remaining.len(), self.sample_size)
                .into_vec();
            // descending, so each swap_remove only moves an unpicked row
            picked.sort_unstable_by(|a, b| b.cmp(a));
            picked
                .into_iter()
                .map(|i| self.remaining.swap_remove(i))
                .collect()
        };

        self.exhausted = self.remaining.is_empty();
        self.batch(rows)
    }

    fn batch(&self, mut rows: Vec<TripRecord>) -> SampleBatch {
        rows.sort_by_key(|r| r.row);
        SampleBatch {
            rows,
            remaining: self.remaining.len(),
            exhausted: self.exhausted,
        }
    }
}

impl Iterator for SampleSession {
    type Item = SampleBatch;

    /// Yields batches until the session is exhausted; an empty session yields nothing.
    fn next(&mut self) -> Option<SampleBatch> {
        if self.exhausted {
            return None;
        }
        let batch = self.next_sample();
        (!batch.rows.is_empty()).then_some(batch)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
