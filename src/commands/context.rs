use std::fs;
use std::path::Path;

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::dataset::{DataSource, Dataset, DatasetLoader, DirectorySource};
use crate::filter::FilterCriteria;
use crate::output::{ColorMode, ErrorOutput, LoadProgress};
use crate::{BikeshareError, EXIT_CONFIG_ERROR, EXIT_DATA_ERROR};

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from the filesystem.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or validated.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Exit code for a failed command: 1 when the data is at fault, 2 for configuration
/// or usage problems.
#[must_use]
pub(crate) const fn exit_code_for(error: &BikeshareError) -> i32 {
    match error {
        BikeshareError::InvalidRecord { .. }
        | BikeshareError::InvalidDuration { .. }
        | BikeshareError::DataSource { .. }
        | BikeshareError::Csv(_)
        | BikeshareError::JsonSerialize(_)
        | BikeshareError::Io(_) => EXIT_DATA_ERROR,
        BikeshareError::UnknownCity(_)
        | BikeshareError::InvalidFilter { .. }
        | BikeshareError::InvalidSampleSize(_)
        | BikeshareError::Config(_)
        | BikeshareError::TomlParse(_)
        | BikeshareError::InputClosed => EXIT_CONFIG_ERROR,
    }
}

/// Prints `error` to stderr and returns the matching exit code.
pub(crate) fn report_error(error: &BikeshareError, color: ColorChoice) -> i32 {
    ErrorOutput::new(color_choice_to_mode(color)).print_error(
        error.error_type(),
        &error.message(),
        error.detail().as_deref(),
        None,
    );
    exit_code_for(error)
}

/// Everything a data command needs after flags and config are resolved.
pub(crate) struct CommandContext<S: DataSource = DirectorySource> {
    pub config: Config,
    pub color: ColorMode,
    pub quiet: bool,
    pub verbose: u8,
    loader: DatasetLoader<S>,
    diagnostics: ErrorOutput,
}

impl CommandContext<DirectorySource> {
    /// Loads the config and builds the directory data source.
    ///
    /// # Errors
    /// Returns an error if the config cannot be loaded or names an unknown city.
    pub(crate) fn from_cli(cli: &Cli) -> crate::Result<Self> {
        let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
        let source = loaded.config.data_source(cli.data_dir.as_deref())?;
        let color = color_choice_to_mode(cli.color);
        let loader = DatasetLoader::new(source).with_progress(LoadProgress::new(cli.quiet));

        let context = Self::new(loaded.config, loader, color, cli.quiet, cli.verbose);
        if let Some(path) = &loaded.source {
            context.info(&format!("Using config file {}", path.display()));
        }
        Ok(context)
    }
}

impl<S: DataSource> CommandContext<S> {
    pub(crate) fn new(
        config: Config,
        loader: DatasetLoader<S>,
        color: ColorMode,
        quiet: bool,
        verbose: u8,
    ) -> Self {
        Self {
            config,
            color,
            quiet,
            verbose,
            loader,
            diagnostics: ErrorOutput::new(color),
        }
    }

    /// Printed at `-v` and above.
    pub(crate) fn info(&self, message: &str) {
        if self.verbose > 0 && !self.quiet {
            self.diagnostics.print_info(message);
        }
    }

    pub(crate) fn warn(&self, message: &str) {
        if !self.quiet {
            self.diagnostics.print_warning(message);
        }
    }

    /// Loads and filters, reporting row counts at `-v` and warning on an empty result.
    ///
    /// # Errors
    /// Returns an error if the city table cannot be opened or parsed.
    pub(crate) fn load(&self, criteria: &FilterCriteria) -> crate::Result<Dataset> {
        let dataset = self.loader.load(criteria)?;
        self.info(&format!(
            "Loaded {} of {} rows from {}",
            dataset.len(),
            dataset.source_rows(),
            self.loader.source().location(criteria.city)
        ));
        if self.verbose > 1 {
            self.info(&format!(
                "Columns: gender {}, birth year {}",
                availability(dataset.schema().has_gender),
                availability(dataset.schema().has_birth_year)
            ));
        }
        if dataset.is_empty() {
            self.warn(&format!("No trips match {criteria}"));
        }
        Ok(dataset)
    }
}

const fn availability(present: bool) -> &'static str {
    if present { "present" } else { "missing" }
}

/// Writes to `output_path`, or to stdout when none is given.
///
/// # Errors
/// Returns an error if the file or its parent directories cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
