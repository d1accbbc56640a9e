use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BikeshareError {
    #[error("Invalid duration: {seconds} (durations must be non-negative seconds)")]
    InvalidDuration { seconds: f64 },

    #[error("Unknown city: '{0}'")]
    UnknownCity(String),

    #[error("Invalid {kind} filter: '{value}'")]
    InvalidFilter { kind: &'static str, value: String },

    #[error("Invalid sample size: {0} (expected 1 to 20)")]
    InvalidSampleSize(usize),

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("Failed to open data source: {path}")]
    DataSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before an answer was given")]
    InputClosed,
}

impl BikeshareError {
    /// Short category name used as the heading of stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidDuration { .. } => "InvalidDuration",
            Self::UnknownCity(_) => "UnknownCity",
            Self::InvalidFilter { .. } => "InvalidFilter",
            Self::InvalidSampleSize(_) => "InvalidSampleSize",
            Self::InvalidRecord { .. } => "InvalidRecord",
            Self::DataSource { .. } => "DataSource",
            Self::Csv(_) => "Csv",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::JsonSerialize(_) => "Json",
            Self::Io(_) => "IO",
            Self::InputClosed => "Input",
        }
    }

    /// Human-readable message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidDuration { seconds } => format!("{seconds} is not a valid duration"),
            Self::UnknownCity(city) => format!("'{city}' is not a known city"),
            Self::InvalidFilter { kind, value } => format!("'{value}' is not a valid {kind}"),
            Self::InvalidSampleSize(size) => format!("sample size {size} is out of range"),
            Self::InvalidRecord { line, reason } => format!("line {line}: {reason}"),
            Self::DataSource { path, source } => {
                format!("cannot open '{}': {source}", path.display())
            }
            Self::Csv(e) => e.to_string(),
            Self::Config(msg) => msg.clone(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
            Self::Io(e) => e.to_string(),
            Self::InputClosed => "input closed before an answer was given".to_string(),
        }
    }

    /// Extra context line, when one helps the user fix the problem.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidDuration { .. } => {
                Some("durations must be zero or more seconds".to_string())
            }
            Self::UnknownCity(_) => Some(format!(
                "expected one of: {}",
                crate::filter::City::ALL
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
            Self::InvalidFilter { kind, .. } => Some(match *kind {
                "month" => "expected 'all' or a month from january to june".to_string(),
                _ => "expected 'all' or a weekday from monday to sunday".to_string(),
            }),
            Self::InvalidSampleSize(_) => Some("expected a number from 1 to 20".to_string()),
            Self::DataSource { .. } => {
                Some("check `data.dir` in the config file or pass --data-dir".to_string())
            }
            Self::TomlParse(e) => {
                e.span().map(|span| format!("at bytes {}..{}", span.start, span.end))
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BikeshareError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
