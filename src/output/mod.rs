mod error_output;
mod json;
mod progress;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use progress::LoadProgress;
pub use text::{ColorMode, RULE, TextFormatter};

use crate::error::Result;
use crate::sample::SampleBatch;
use crate::stats::StatsReport;

/// ANSI color codes
pub(crate) mod ansi {
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Trait for rendering statistics and raw-data batches.
pub trait OutputFormatter {
    /// Format a full statistics report.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_report(&self, report: &StatsReport) -> Result<String>;

    /// Format the batches drawn by a sample session.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_batches(&self, batches: &[SampleBatch]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
