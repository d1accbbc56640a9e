use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::filter::weekday_name;
use crate::{BikeshareError, Result};

pub const START_TIME: &str = "Start Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city table must carry.
pub const REQUIRED_COLUMNS: [&str; 5] =
    [START_TIME, TRIP_DURATION, START_STATION, END_STATION, USER_TYPE];

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// One CSV row as it appears on disk. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// A single trip with its start time parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    /// 0-based position of the row in the source table.
    pub row: usize,
    pub start_time: NaiveDateTime,
    /// Seconds. Some sources record fractions of a second.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Month number, 1 to 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Full weekday name, e.g. `Monday`.
    #[must_use]
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.weekday())
    }

    /// Hour of the start time, 0 to 23.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// `"<start> ==> <end>"`.
    #[must_use]
    pub fn full_trip(&self) -> String {
        format!("{} ==> {}", self.start_station, self.end_station)
    }

    pub(crate) fn from_raw(row: usize, raw: RawTrip) -> Result<Self> {
        let line = line_of(row);
        let start_time = parse_timestamp(&raw.start_time).ok_or_else(|| {
            BikeshareError::InvalidRecord {
                line,
                reason: format!("unparseable start time '{}'", raw.start_time),
            }
        })?;

        let birth_year = raw
            .birth_year
            .map(|year| {
                whole_year(year).ok_or_else(|| BikeshareError::InvalidRecord {
                    line,
                    reason: format!("birth year '{year}' is not a whole number"),
                })
            })
            .transpose()?;

        Ok(Self {
            row,
            start_time,
            trip_duration: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: non_blank(raw.user_type),
            gender: non_blank(raw.gender),
            birth_year,
        })
    }
}

/// File line of a data row: the header is line 1.
pub(crate) const fn line_of(row: usize) -> usize {
    row + 2
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

#[allow(clippy::cast_possible_truncation)]
fn whole_year(year: f64) -> Option<i32> {
    (year.is_finite() && year.fract() == 0.0 && year.abs() <= f64::from(i32::MAX))
        .then_some(year as i32)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Which optional columns a loaded table carries.
///
/// Computed once from the header so downstream passes branch on a flag
/// instead of probing for columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    #[must_use]
    pub const fn full() -> Self {
        Self {
            has_gender: true,
            has_birth_year: true,
        }
    }

    /// Inspects a CSV header row.
    ///
    /// # Errors
    /// Returns `InvalidRecord` for the header line when a required column is missing.
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.contains(*column))
        {
            return Err(BikeshareError::InvalidRecord {
                line: 1,
                reason: format!("missing required column '{missing}'"),
            });
        }
        Ok(Self {
            has_gender: headers.contains(&GENDER),
            has_birth_year: headers.contains(&BIRTH_YEAR),
        })
    }
}
