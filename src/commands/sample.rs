use crate::EXIT_SUCCESS;
use crate::cli::{Cli, SampleArgs};
use crate::dataset::DataSource;
use crate::filter::FilterCriteria;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::sample::{SampleBatch, SampleSession};

use super::context::{CommandContext, report_error, write_output};

#[must_use]
pub fn run_sample(args: &SampleArgs, cli: &Cli) -> i32 {
    let result = CommandContext::from_cli(cli)
        .and_then(|context| render_sample(args, &context))
        .and_then(|output| write_output(None, &output));

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e, cli.color),
    }
}

/// Draws batches until the data runs out or `--batches` is reached.
///
/// # Errors
/// Returns an error if the data cannot be loaded or the sample size is out of range.
pub(crate) fn render_sample<S: DataSource>(
    args: &SampleArgs,
    context: &CommandContext<S>,
) -> crate::Result<String> {
    let size = args.size.unwrap_or(context.config.sample.size);
    let criteria = FilterCriteria::new(args.filter.city)
        .with_month(args.filter.month)
        .with_day(args.filter.day);
    let dataset = context.load(&criteria)?;

    let mut session = match args.seed.or(context.config.sample.seed) {
        Some(seed) => SampleSession::with_seed(&dataset, size, seed)?,
        None => SampleSession::new(&dataset, size)?,
    };
    let batches = draw(&mut session, args.batches);
    context.info(&format!(
        "Drew {} batches of up to {size} rows, {} rows left",
        batches.len(),
        session.remaining()
    ));

    match args.format {
        OutputFormat::Text => TextFormatter::new(context.color).format_batches(&batches),
        OutputFormat::Json => JsonFormatter::new().format_batches(&batches),
    }
}

/// An empty dataset still yields its single exhausted batch.
fn draw(session: &mut SampleSession, limit: Option<usize>) -> Vec<SampleBatch> {
    let limit = limit.unwrap_or(usize::MAX);
    let mut batches = Vec::new();
    while batches.len() < limit {
        let batch = session.next_sample();
        let exhausted = batch.exhausted;
        batches.push(batch);
        if exhausted {
            break;
        }
    }
    batches
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod tests;
