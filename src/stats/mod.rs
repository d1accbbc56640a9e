mod duration;
mod frequency;
mod report;
mod stations;
mod travel;
mod trips;
mod users;

pub use duration::format_duration;
pub use frequency::{ValueCount, mode, value_counts};
pub use report::{Section, SectionResult, SectionStats, StatsReport, run_section};
pub use stations::StationStats;
pub use travel::{TimeStats, format_hour};
pub use trips::DurationStats;
pub use users::{Availability, BirthYearStats, UserStats};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
