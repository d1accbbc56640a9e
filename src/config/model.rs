use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::sample::DEFAULT_SAMPLE_SIZE;

/// Where the city tables live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataConfig {
    /// Directory holding the city CSV files (default: current directory).
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    /// Per-city file overrides keyed by city name, relative to `dir`.
    #[serde(default)]
    pub files: IndexMap<String, PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            files: IndexMap::new(),
        }
    }
}

/// Raw-data viewer defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SampleConfig {
    /// Rows per batch (1..=20, default: 5).
    #[serde(default = "default_sample_size")]
    pub size: usize,

    /// Fixed seed for reproducible batches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Print "This took X seconds." after each statistics section.
    #[serde(default = "default_true")]
    pub timing: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { timing: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub sample: SampleConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

const fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

const fn default_true() -> bool {
    true
}
