//! Checks that run after a config file parses.

use std::path::Path;

use crate::Result;
use crate::config::Config;
use crate::dataset::DirectorySource;
use crate::filter::City;
use crate::sample::validate_sample_size;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns `UnknownCity` for a `data.files` key that names no known city, or
/// `InvalidSampleSize` when `sample.size` is outside `1..=20`.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    for key in config.data.files.keys() {
        key.parse::<City>()?;
    }
    validate_sample_size(config.sample.size)?;
    Ok(())
}

impl Config {
    /// Builds the directory source described by `[data]`.
    ///
    /// `dir_override` (from `--data-dir`) replaces `data.dir`; file overrides still apply.
    ///
    /// # Errors
    /// Returns `UnknownCity` for an unrecognised `data.files` key.
    pub fn data_source(&self, dir_override: Option<&Path>) -> Result<DirectorySource> {
        let dir = dir_override.unwrap_or(self.data.dir.as_path());
        let mut source = DirectorySource::new(dir);
        for (key, file) in &self.data.files {
            source = source.with_file(key.parse()?, file);
        }
        Ok(source)
    }
}
