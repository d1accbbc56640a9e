use chrono::Weekday;

use crate::dataset::{Dataset, TripRecord};
use crate::filter::{month_name, weekday_name};

use super::frequency::mode;

/// Most frequent times of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// 1-based month number.
    pub month: u32,
    pub day: Weekday,
    /// 0 to 23.
    pub hour: u32,
}

impl TimeStats {
    /// `None` when the dataset is empty.
    #[must_use]
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let records = dataset.records();
        Some(Self {
            month: mode(records.iter().map(TripRecord::month))?,
            day: mode(records.iter().map(TripRecord::weekday))?,
            hour: mode(records.iter().map(TripRecord::hour))?,
        })
    }

    #[must_use]
    pub fn month_name(&self) -> &'static str {
        month_name(self.month).unwrap_or("Unknown")
    }

    #[must_use]
    pub const fn day_name(&self) -> &'static str {
        weekday_name(self.day)
    }

    /// The hour on a 12-hour clock, e.g. `05:00 PM`.
    #[must_use]
    pub fn hour_label(&self) -> String {
        format_hour(self.hour)
    }
}

/// `0` is `12:00 AM`, `13` is `01:00 PM`.
#[must_use]
pub fn format_hour(hour: u32) -> String {
    let clock = match hour % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    format!("{clock:02}:00 {suffix}")
}
