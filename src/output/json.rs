use serde::Serialize;

use crate::dataset::TripRecord;
use crate::error::Result;
use crate::sample::SampleBatch;
use crate::stats::{
    Availability, BirthYearStats, DurationStats, SectionStats, StationStats, StatsReport,
    TimeStats, UserStats, ValueCount,
};

use super::OutputFormatter;

/// Pretty-printed JSON. A requested section with no data is `null`; sections
/// that were not requested are omitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    city: &'static str,
    month: &'static str,
    day: &'static str,
    trips: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<Option<JsonTimeStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stations: Option<Option<&'a StationStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    durations: Option<Option<JsonDurationStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    users: Option<Option<JsonUserStats<'a>>>,
}

#[derive(Serialize)]
struct JsonTimeStats {
    month: &'static str,
    day: &'static str,
    hour: u32,
    hour_label: String,
}

impl From<&TimeStats> for JsonTimeStats {
    fn from(stats: &TimeStats) -> Self {
        Self {
            month: stats.month_name(),
            day: stats.day_name(),
            hour: stats.hour,
            hour_label: stats.hour_label(),
        }
    }
}

#[derive(Serialize)]
struct JsonDurationStats {
    trips: usize,
    total_seconds: f64,
    mean_seconds: f64,
    /// `None` when the value cannot be formatted, with the reason in `total_error`.
    total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_error: Option<String>,
    mean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mean_error: Option<String>,
}

impl From<&DurationStats> for JsonDurationStats {
    fn from(stats: &DurationStats) -> Self {
        let (total, total_error) = split_display(stats.total_display());
        let (mean, mean_error) = split_display(stats.mean_display());
        Self {
            trips: stats.trips,
            total_seconds: stats.total_seconds,
            mean_seconds: stats.mean_seconds,
            total,
            total_error,
            mean,
            mean_error,
        }
    }
}

fn split_display(display: Result<String>) -> (Option<String>, Option<String>) {
    match display {
        Ok(text) => (Some(text), None),
        Err(e) => (None, Some(e.message())),
    }
}

#[derive(Serialize)]
struct JsonUserStats<'a> {
    user_types: &'a [ValueCount<String>],
    genders: Availability<&'a Vec<ValueCount<String>>>,
    birth_years: Availability<&'a Option<BirthYearStats>>,
}

impl<'a> From<&'a UserStats> for JsonUserStats<'a> {
    fn from(stats: &'a UserStats) -> Self {
        Self {
            user_types: &stats.user_types,
            genders: stats.genders.as_ref(),
            birth_years: stats.birth_years.as_ref(),
        }
    }
}

#[derive(Serialize)]
struct JsonBatch<'a> {
    rows: &'a [TripRecord],
    remaining: usize,
    exhausted: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &StatsReport) -> Result<String> {
        let mut output = JsonReport {
            city: report.criteria.city.name(),
            month: report.criteria.month.label().unwrap_or("all"),
            day: report.criteria.day.label().unwrap_or("all"),
            trips: report.trips,
            time: None,
            stations: None,
            durations: None,
            users: None,
        };

        for section in &report.sections {
            match &section.stats {
                SectionStats::Time(s) => output.time = Some(s.as_ref().map(Into::into)),
                SectionStats::Stations(s) => output.stations = Some(s.as_ref()),
                SectionStats::Durations(s) => {
                    output.durations = Some(s.as_ref().map(Into::into));
                }
                SectionStats::Users(s) => output.users = Some(s.as_ref().map(Into::into)),
            }
        }

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_batches(&self, batches: &[SampleBatch]) -> Result<String> {
        let output: Vec<JsonBatch<'_>> = batches
            .iter()
            .map(|b| JsonBatch {
                rows: &b.rows,
                remaining: b.remaining,
                exhausted: b.exhausted,
            })
            .collect();
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
