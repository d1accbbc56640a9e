use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::dataset::Dataset;
use crate::filter::FilterCriteria;
use crate::{BikeshareError, Result};

use super::{DurationStats, StationStats, TimeStats, UserStats};

/// One of the four statistics passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Time,
    Stations,
    Durations,
    Users,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Time, Self::Stations, Self::Durations, Self::Users];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Stations => "stations",
            Self::Durations => "durations",
            Self::Users => "users",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "time" | "times" => Ok(Self::Time),
            "stations" | "station" => Ok(Self::Stations),
            "durations" | "duration" => Ok(Self::Durations),
            "users" | "user" => Ok(Self::Users),
            other => Err(BikeshareError::Config(format!(
                "Unknown section '{other}'. Expected one of: time, stations, durations, users"
            ))),
        }
    }
}

/// Output of a single pass; `None` inside means the dataset had no rows.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionStats {
    Time(Option<TimeStats>),
    Stations(Option<StationStats>),
    Durations(Option<DurationStats>),
    Users(Option<UserStats>),
}

impl SectionStats {
    #[must_use]
    pub const fn section(&self) -> Section {
        match self {
            Self::Time(_) => Section::Time,
            Self::Stations(_) => Section::Stations,
            Self::Durations(_) => Section::Durations,
            Self::Users(_) => Section::Users,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub const fn has_data(&self) -> bool {
        match self {
            Self::Time(s) => s.is_some(),
            Self::Stations(s) => s.is_some(),
            Self::Durations(s) => s.is_some(),
            Self::Users(s) => s.is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionResult {
    pub stats: SectionStats,
    pub elapsed: Duration,
}

/// Runs one pass over `dataset` and times it.
#[must_use]
pub fn run_section(dataset: &Dataset, section: Section) -> SectionResult {
    let started = Instant::now();
    let stats = match section {
        Section::Time => SectionStats::Time(TimeStats::compute(dataset)),
        Section::Stations => SectionStats::Stations(StationStats::compute(dataset)),
        Section::Durations => SectionStats::Durations(DurationStats::compute(dataset)),
        Section::Users => SectionStats::Users(UserStats::compute(dataset)),
    };
    SectionResult {
        stats,
        elapsed: started.elapsed(),
    }
}

/// All requested passes over one filtered dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub criteria: FilterCriteria,
    pub trips: usize,
    pub sections: Vec<SectionResult>,
}

impl StatsReport {
    /// Runs `sections` in the given order. Passes are independent of each other.
    #[must_use]
    pub fn build(dataset: &Dataset, criteria: FilterCriteria, sections: &[Section]) -> Self {
        Self {
            criteria,
            trips: dataset.len(),
            sections: sections.iter().map(|s| run_section(dataset, *s)).collect(),
        }
    }

    #[must_use]
    pub fn section(&self, section: Section) -> Option<&SectionStats> {
        self.sections
            .iter()
            .map(|r| &r.stats)
            .find(|s| s.section() == section)
    }
}
