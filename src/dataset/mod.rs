//! Trip tables: parsing, derived time fields and month/day filtering.

mod loader;
mod record;
mod source;

pub use loader::{DatasetLoader, parse_csv};
pub use record::{REQUIRED_COLUMNS, Schema, TripRecord};
pub use source::{DataSource, DirectorySource, MemorySource};

use chrono::Weekday;

use crate::filter::{City, DayFilter, MonthFilter};

/// An ordered collection of trips for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    city: City,
    schema: Schema,
    records: Vec<TripRecord>,
    source_rows: usize,
}

impl Dataset {
    #[must_use]
    pub fn new(city: City, schema: Schema, records: Vec<TripRecord>) -> Self {
        let source_rows = records.len();
        Self {
            city,
            schema,
            records,
            source_rows,
        }
    }

    #[must_use]
    pub const fn city(&self) -> City {
        self.city
    }

    #[must_use]
    pub const fn schema(&self) -> Schema {
        self.schema
    }

    #[must_use]
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    #[cfg(test)]
    #[must_use]
    pub fn into_records(self) -> Vec<TripRecord> {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows in the table before any filter was applied.
    #[must_use]
    pub const fn source_rows(&self) -> usize {
        self.source_rows
    }

    /// Keeps only trips that started in the given month (1-based).
    #[must_use]
    pub fn retain_month(mut self, month: u32) -> Self {
        self.records.retain(|r| r.month() == month);
        self
    }

    #[must_use]
    pub fn retain_day(mut self, day: Weekday) -> Self {
        self.records.retain(|r| r.weekday() == day);
        self
    }

    /// Applies both filters; either order gives the same rows.
    #[must_use]
    pub fn filter(self, month: MonthFilter, day: DayFilter) -> Self {
        let by_month = match month {
            MonthFilter::All => self,
            MonthFilter::Only(m) => self.retain_month(m),
        };
        match day {
            DayFilter::All => by_month,
            DayFilter::Only(d) => by_month.retain_day(d),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
