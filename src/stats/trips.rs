use serde::Serialize;

use crate::Result;
use crate::dataset::Dataset;

use super::duration::format_duration;

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

impl DurationStats {
    /// `None` when the dataset is empty.
    #[must_use]
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let trips = dataset.len();
        if trips == 0 {
            return None;
        }
        let total_seconds: f64 = dataset.records().iter().map(|r| r.trip_duration).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean_seconds = total_seconds / trips as f64;
        Some(Self {
            trips,
            total_seconds,
            mean_seconds,
        })
    }

    /// # Errors
    /// Returns `InvalidDuration` if the total is negative.
    pub fn total_display(&self) -> Result<String> {
        format_duration(self.total_seconds)
    }

    /// # Errors
    /// Returns `InvalidDuration` if the mean is negative.
    pub fn mean_display(&self) -> Result<String> {
        format_duration(self.mean_seconds)
    }
}
