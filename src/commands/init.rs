use std::fs;

use crate::cli::{ColorChoice, InitArgs};
use crate::{BikeshareError, EXIT_SUCCESS, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs, color: ColorChoice, quiet: bool) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e, color),
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(BikeshareError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# bikeshare configuration file

[data]
# Directory holding chicago.csv, new_york_city.csv and washington.csv
dir = "."

# Per-city file names, relative to `dir`
# [data.files]
# chicago = "chicago.csv"
# "new york city" = "new_york_city.csv"
# washington = "washington.csv"

[sample]
# Rows per raw-data batch, 1 to 20 (default: 5)
size = 5

# Fixed seed for reproducible batches
# seed = 42

[output]
# Print how long each statistics section took (default: true)
timing = true
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
