use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::filter::{City, DayFilter, MonthFilter};
use crate::output::OutputFormat;
use crate::stats::Section;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "bikeshare")]
#[command(author, version, about = "Explore US bikeshare trip data")]
#[command(long_about = "Load bikeshare trips for Chicago, New York City or Washington, \
    filter them by month and weekday, and print travel statistics.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Data could not be loaded or parsed\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Directory holding the city CSV files (overrides `data.dir`)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer prompts interactively, as a guided session
    Explore(ExploreArgs),

    /// Print statistics for one city and filter selection
    Stats(StatsArgs),

    /// Print random batches of raw trip rows
    Sample(SampleArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    /// Seed for the raw-data viewer (overrides `sample.seed`)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// City and time filters shared by `stats` and `sample`.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// City to analyse: chicago, new york city, washington
    #[arg(long)]
    pub city: City,

    /// Month to keep (january..june) or "all"
    #[arg(long, default_value = "all")]
    pub month: MonthFilter,

    /// Weekday to keep (monday..sunday) or "all"
    #[arg(long, default_value = "all")]
    pub day: DayFilter,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Sections to print (comma-separated: time,stations,durations,users)
    #[arg(long, value_delimiter = ',')]
    pub section: Vec<Section>,

    /// Do not print how long each section took
    #[arg(long)]
    pub no_timing: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Rows per batch, 1 to 20 (overrides `sample.size`)
    #[arg(long)]
    pub size: Option<usize>,

    /// Seed for reproducible batches (overrides `sample.seed`)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many batches (default: until the data runs out)
    #[arg(long)]
    pub batches: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".bikeshare.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
