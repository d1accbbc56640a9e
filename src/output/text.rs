use std::fmt::Write;
use std::time::Duration;

use crate::dataset::TripRecord;
use crate::error::Result;
use crate::sample::SampleBatch;
use crate::stats::{
    Availability, DurationStats, Section, SectionResult, SectionStats, StationStats,
    StatsReport, TimeStats, UserStats, ValueCount,
};

use super::{OutputFormatter, ansi};

/// Separator printed after every section.
pub const RULE: &str = "----------------------------------------";

const NO_DATA: &str = "No trips match the selected filters.";
const END_OF_DATA: &str = "You have reached the End of the Data !!";

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

pub struct TextFormatter {
    use_colors: bool,
    show_timing: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            show_timing: true,
        }
    }

    #[must_use]
    pub const fn with_timing(mut self, show: bool) -> Self {
        self.show_timing = show;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn unavailable(&self, field: &str) -> String {
        self.paint(
            &format!("- Unfortunately {field} information is not available!"),
            ansi::YELLOW,
        )
    }

    /// One section as printed by the interactive session, including the timing line.
    #[must_use]
    pub fn format_section(&self, result: &SectionResult) -> String {
        let mut out = String::new();
        let heading = match result.stats.section() {
            Section::Time => "Calculating The Most Frequent Times of Travel...",
            Section::Stations => "Calculating The Most Popular Stations and Trip...",
            Section::Durations => "Calculating Trip Duration...",
            Section::Users => "Calculating User Stats...",
        };
        let _ = writeln!(out, "\n{}\n", self.paint(heading, ansi::CYAN));

        match &result.stats {
            SectionStats::Time(Some(stats)) => Self::write_time(&mut out, stats),
            SectionStats::Stations(Some(stats)) => Self::write_stations(&mut out, stats),
            SectionStats::Durations(Some(stats)) => Self::write_durations(&mut out, stats),
            SectionStats::Users(Some(stats)) => self.write_users(&mut out, stats),
            _ => {
                let _ = writeln!(out, "{}", self.paint(NO_DATA, ansi::YELLOW));
            }
        }

        if self.show_timing {
            let _ = writeln!(out, "\nThis took {} seconds.", format_elapsed(result.elapsed));
        }
        let _ = write!(out, "{RULE}");
        out
    }

    fn write_time(out: &mut String, stats: &TimeStats) {
        let _ = writeln!(out, "Most Common Start Month: {}", stats.month_name());
        let _ = writeln!(out, "Most Common Start Day of Week: {}", stats.day_name());
        let _ = writeln!(out, "Most Common Start Hour: {}", stats.hour_label());
    }

    fn write_stations(out: &mut String, stats: &StationStats) {
        let _ = writeln!(out, "Most Common Start Station: {}", stats.start_station);
        let _ = writeln!(out, "Most Common End Station: {}", stats.end_station);
        let _ = writeln!(out, "Most Frequent Trip: {}", stats.trip);
    }

    fn write_durations(out: &mut String, stats: &DurationStats) {
        let line = |value: Result<String>| {
            value.unwrap_or_else(|e| format!("unavailable ({})", e.message()))
        };
        let _ = writeln!(out, "Total Travel Time: {}", line(stats.total_display()));
        let _ = writeln!(out, "Mean Travel Time: {}", line(stats.mean_display()));
    }

    fn write_users(&self, out: &mut String, stats: &UserStats) {
        let _ = writeln!(out, "Types of Users:");
        let _ = writeln!(out, "{}", "-".repeat(15));
        write_counts(out, &stats.user_types);

        match &stats.genders {
            Availability::Available(genders) => {
                let _ = writeln!(out, "\nGender of Users:");
                let _ = writeln!(out, "{}", "-".repeat(16));
                if genders.is_empty() {
                    let _ = writeln!(out, "- No Gender recorded for these trips.");
                }
                write_counts(out, genders);
            }
            Availability::NotAvailable => {
                let _ = writeln!(out, "{}", self.unavailable("Gender"));
            }
        }

        match &stats.birth_years {
            Availability::Available(Some(years)) => {
                let _ = writeln!(out, "\nEarliest Year of Birth: {}", years.earliest);
                let _ = writeln!(out, "Most Recent Year of Birth: {}", years.most_recent);
                let _ = writeln!(out, "Most Common Year of Birth: {}", years.most_common);
            }
            Availability::Available(None) => {
                let _ = writeln!(out, "- No Year of Birth recorded for these trips.");
            }
            Availability::NotAvailable => {
                let _ = writeln!(out, "{}", self.unavailable("Year of Birth"));
            }
        }
    }

    /// One raw-data batch followed by the remaining count or the end-of-data notice.
    #[must_use]
    pub fn format_batch(&self, batch: &SampleBatch) -> String {
        let mut out = String::new();
        for row in &batch.rows {
            let _ = writeln!(out, "{}", format_row(row));
        }
        if batch.exhausted {
            let _ = writeln!(out, "{RULE}");
            let _ = write!(out, "{}", self.paint(END_OF_DATA, ansi::CYAN));
        } else {
            let _ = write!(out, "{} rows remaining", batch.remaining);
        }
        out
    }
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &StatsReport) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "Analysing {} trips for {}", report.trips, report.criteria);
        let _ = write!(out, "{RULE}");
        for section in &report.sections {
            let _ = writeln!(out);
            let _ = write!(out, "{}", self.format_section(section));
        }
        Ok(out)
    }

    fn format_batches(&self, batches: &[SampleBatch]) -> Result<String> {
        let out: Vec<String> = batches.iter().map(|b| self.format_batch(b)).collect();
        Ok(out.join("\n"))
    }
}

fn write_counts(out: &mut String, counts: &[ValueCount<String>]) {
    for c in counts {
        let _ = writeln!(out, "- There is {} {} User", c.count, c.value);
    }
}

fn format_row(row: &TripRecord) -> String {
    let optional = |value: Option<&str>| value.unwrap_or("-").to_string();
    format!(
        "[{}] {} | {}s | {} | {} | {} | {}",
        row.row,
        row.start_time.format("%Y-%m-%d %H:%M:%S"),
        row.trip_duration,
        row.full_trip(),
        optional(row.user_type.as_deref()),
        optional(row.gender.as_deref()),
        row.birth_year.map_or_else(|| "-".to_string(), |y| y.to_string()),
    )
}

/// Seconds rounded to three decimals, e.g. `0.004`.
fn format_elapsed(elapsed: Duration) -> String {
    let secs = (elapsed.as_secs_f64() * 1000.0).round() / 1000.0;
    secs.to_string()
}
