use crate::EXIT_SUCCESS;
use crate::cli::{Cli, StatsArgs};
use crate::dataset::DataSource;
use crate::filter::FilterCriteria;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::stats::{Section, StatsReport};

use super::context::{CommandContext, report_error, write_output};

#[must_use]
pub fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    let result = CommandContext::from_cli(cli).and_then(|context| run_stats_impl(args, &context));

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => report_error(&e, cli.color),
    }
}

/// Builds the report for the selected sections and writes it out.
///
/// # Errors
/// Returns an error if the data cannot be loaded or the output cannot be written.
pub(crate) fn run_stats_impl<S: DataSource>(
    args: &StatsArgs,
    context: &CommandContext<S>,
) -> crate::Result<i32> {
    let output = render_stats(args, context)?;
    write_output(args.output.as_deref(), &output)?;
    if let Some(path) = &args.output {
        context.info(&format!("Wrote report to {}", path.display()));
    }
    Ok(EXIT_SUCCESS)
}

pub(crate) fn render_stats<S: DataSource>(
    args: &StatsArgs,
    context: &CommandContext<S>,
) -> crate::Result<String> {
    let criteria = FilterCriteria::new(args.filter.city)
        .with_month(args.filter.month)
        .with_day(args.filter.day);
    let dataset = context.load(&criteria)?;

    let sections = selected_sections(&args.section);
    let report = StatsReport::build(&dataset, criteria, &sections);

    let show_timing = context.config.output.timing && !args.no_timing;
    match args.format {
        OutputFormat::Text => TextFormatter::new(context.color)
            .with_timing(show_timing)
            .format_report(&report),
        OutputFormat::Json => JsonFormatter::new().format_report(&report),
    }
}

/// Requested sections without repeats, in the order given; all four when none are named.
fn selected_sections(requested: &[Section]) -> Vec<Section> {
    if requested.is_empty() {
        return Section::ALL.to_vec();
    }
    let mut sections = Vec::with_capacity(requested.len());
    for section in requested {
        if !sections.contains(section) {
            sections.push(*section);
        }
    }
    sections
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
