//! Filter criteria: which city to load and which month/weekday to keep.
//!
//! All text parsing is case-insensitive and ignores surrounding whitespace,
//! so the same parsers serve the CLI flags, the config file and the prompt.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::Serialize;

use crate::{BikeshareError, Result};

/// A city with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [Self; 3] = [Self::Chicago, Self::NewYorkCity, Self::Washington];

    /// The lowercase name users type, e.g. `new york city`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }

    /// Default CSV file name for this city.
    #[must_use]
    pub const fn default_file(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        // `new_york_city` is accepted too, matching the file name and config keys
        let wanted = wanted.replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|city| city.name() == wanted)
            .ok_or_else(|| BikeshareError::UnknownCity(s.trim().to_string()))
    }
}

/// The months covered by the published data, January to June.
pub const FILTER_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Month filter: everything, or one month by its 1-based ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(u32),
}

impl MonthFilter {
    /// The title-case month name, or `None` for [`MonthFilter::All`].
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Only(ordinal) => month_name(ordinal),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(Self::All);
        }
        FILTER_MONTHS
            .iter()
            .position(|m| *m == wanted)
            .map(|index| Self::Only(index as u32 + 1))
            .ok_or_else(|| BikeshareError::InvalidFilter {
                kind: "month",
                value: s.trim().to_string(),
            })
    }
}

/// Weekday filter: everything, or one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Only(day) => Some(weekday_name(day)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(Self::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|day| weekday_name(*day).eq_ignore_ascii_case(&wanted))
            .map(Self::Only)
            .ok_or_else(|| BikeshareError::InvalidFilter {
                kind: "day",
                value: s.trim().to_string(),
            })
    }
}

/// The user's city/month/day selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    #[must_use]
    pub const fn new(city: City) -> Self {
        Self {
            city,
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }

    #[must_use]
    pub const fn with_month(mut self, month: MonthFilter) -> Self {
        self.month = month;
        self
    }

    #[must_use]
    pub const fn with_day(mut self, day: DayFilter) -> Self {
        self.day = day;
        self
    }

    /// Parses the three textual selections.
    ///
    /// # Errors
    /// Returns `UnknownCity` or `InvalidFilter` for values outside the known sets.
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self> {
        Ok(Self {
            city: city.parse()?,
            month: month.parse()?,
            day: day.parse()?,
        })
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (month: {}, day: {})",
            self.city,
            self.month.label().unwrap_or("all"),
            self.day.label().unwrap_or("all")
        )
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name, e.g. `Monday`.
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English month name for a 1-based ordinal.
#[must_use]
pub fn month_name(ordinal: u32) -> Option<&'static str> {
    u8::try_from(ordinal)
        .ok()
        .and_then(|n| chrono::Month::try_from(n).ok())
        .map(|month| month.name())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
