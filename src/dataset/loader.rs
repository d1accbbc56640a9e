use std::io::Read;

use crate::filter::{City, FilterCriteria};
use crate::output::LoadProgress;
use crate::{BikeshareError, Result};

use super::record::{RawTrip, line_of};
use super::{DataSource, Dataset, Schema, TripRecord};

/// Loads a city's table from a [`DataSource`] and applies the month/day filters.
pub struct DatasetLoader<S> {
    source: S,
    progress: LoadProgress,
}

impl<S: DataSource> DatasetLoader<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            progress: LoadProgress::hidden(),
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: LoadProgress) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Loads the table for `criteria.city` and keeps rows matching the filters.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    /// Returns an error if the table cannot be opened or a row cannot be parsed.
    pub fn load(&self, criteria: &FilterCriteria) -> Result<Dataset> {
        let dataset = self.load_unfiltered(criteria.city)?;
        Ok(dataset.filter(criteria.month, criteria.day))
    }

    /// Parses textual criteria, then loads.
    ///
    /// # Errors
    /// Returns `UnknownCity` or `InvalidFilter` for unrecognised names, otherwise as
    /// [`Self::load`].
    pub fn load_by_name(&self, city: &str, month: &str, day: &str) -> Result<Dataset> {
        let criteria = FilterCriteria::parse(city, month, day)?;
        self.load(&criteria)
    }

    /// Loads every row for `city`.
    ///
    /// # Errors
    /// Returns an error if the table cannot be opened or a row cannot be parsed.
    pub fn load_unfiltered(&self, city: City) -> Result<Dataset> {
        let reader = self.source.open(city)?;
        self.progress.start(&self.source.location(city));
        let result = parse_csv(city, reader, || self.progress.inc());
        self.progress.finish();
        result
    }
}

/// Parses a CSV table with a header row.
///
/// `on_row` is called once per data row read.
///
/// # Errors
/// Returns `InvalidRecord` naming the file line of the first bad row, or a CSV error.
pub fn parse_csv<R: Read>(city: City, reader: R, mut on_row: impl FnMut()) -> Result<Dataset> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let schema = Schema::from_headers(csv.headers()?.iter())?;

    let records = csv
        .deserialize::<RawTrip>()
        .enumerate()
        .map(|(row, raw)| {
            let raw = raw.map_err(|e| BikeshareError::InvalidRecord {
                line: line_of(row),
                reason: e.to_string(),
            })?;
            on_row();
            TripRecord::from_raw(row, raw)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Dataset::new(city, schema, records))
}
