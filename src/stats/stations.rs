use serde::Serialize;

use crate::dataset::{Dataset, TripRecord};

use super::frequency::mode;

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// `"<start> ==> <end>"`.
    pub trip: String,
}

impl StationStats {
    /// `None` when the dataset is empty.
    #[must_use]
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let records = dataset.records();
        let start = mode(records.iter().map(|r| r.start_station.as_str()))?;
        let end = mode(records.iter().map(|r| r.end_station.as_str()))?;
        let trip = mode(records.iter().map(TripRecord::full_trip))?;
        Some(Self {
            start_station: start.to_string(),
            end_station: end.to_string(),
            trip,
        })
    }
}
