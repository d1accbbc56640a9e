pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod output;
pub mod prompt;
pub mod sample;
pub mod stats;

#[cfg(test)]
mod test_fixtures;

pub use error::{BikeshareError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DATA_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
