use std::io::{self, BufRead, Write};

use crate::cli::{Cli, ExploreArgs};
use crate::dataset::{DataSource, Dataset};
use crate::filter::{City, DayFilter, FilterCriteria, MonthFilter};
use crate::output::{RULE, TextFormatter};
use crate::prompt::Prompter;
use crate::sample::{MAX_SAMPLE_SIZE, MIN_SAMPLE_SIZE, SampleSession};
use crate::stats::{Section, run_section};
use crate::{BikeshareError, EXIT_SUCCESS};

use super::context::{CommandContext, report_error};

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
const CITY_QUESTION: &str = "Please type a city name from (chicago/new york city/washington): ";
const OPTION_QUESTION: &str =
    "Please choose filtering option from (month/day of week/both/no filter): ";
const MONTH_QUESTION: &str = "Please type a month name like (all, january, february, ... , june): ";
const DAY_QUESTION: &str = "Please type a day name like (all, monday, tuesday, ... sunday): ";
const CONTINUE_PROMPT: &str = "Press Enter to continue...";
const VIEW_QUESTION: &str = "To view a sample of raw data enter \"y\" otherwise press any key: ";
const SIZE_QUESTION: &str = "Please enter the desired sample size (from 1 to 20): ";
const ANOTHER_QUESTION: &str = "To view another sample enter \"y\" otherwise press any key: ";
const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Which of month and weekday the user wants to filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterOption {
    Month,
    Day,
    Both,
    None,
}

impl FilterOption {
    fn parse(answer: &str) -> Option<Self> {
        match answer {
            "month" => Some(Self::Month),
            "day of week" => Some(Self::Day),
            "both" => Some(Self::Both),
            "no filter" => Some(Self::None),
            _ => None,
        }
    }

    const fn asks_month(self) -> bool {
        matches!(self, Self::Month | Self::Both)
    }

    const fn asks_day(self) -> bool {
        matches!(self, Self::Day | Self::Both)
    }
}

#[must_use]
pub fn run_explore(args: &ExploreArgs, cli: &Cli) -> i32 {
    let result = CommandContext::from_cli(cli).and_then(|context| {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
        ExploreSession::new(&context, args.seed).run(&mut prompter)
    });

    match result {
        // Closing stdin ends the session like answering "no" to restart.
        Ok(()) | Err(BikeshareError::InputClosed) => EXIT_SUCCESS,
        Err(e) => report_error(&e, cli.color),
    }
}

/// The guided question/answer flow: filters, statistics, raw rows, restart.
pub(crate) struct ExploreSession<'a, S: DataSource> {
    context: &'a CommandContext<S>,
    formatter: TextFormatter,
    seed: Option<u64>,
}

impl<'a, S: DataSource> ExploreSession<'a, S> {
    pub(crate) fn new(context: &'a CommandContext<S>, seed: Option<u64>) -> Self {
        Self {
            formatter: TextFormatter::new(context.color).with_timing(context.config.output.timing),
            seed: seed.or(context.config.sample.seed),
            context,
        }
    }

    /// Runs rounds until the user declines to restart.
    ///
    /// # Errors
    /// Returns `InputClosed` if input ends mid-round, or any load or IO error.
    pub(crate) fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> crate::Result<()> {
        loop {
            let criteria = Self::ask_filters(prompter)?;
            let dataset = self.context.load(&criteria)?;
            self.show_stats(prompter, &dataset)?;
            self.view_raw_data(prompter, &dataset)?;

            if prompter.ask(RESTART_QUESTION)? != "yes" {
                return Ok(());
            }
        }
    }

    fn ask_filters<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
    ) -> crate::Result<FilterCriteria> {
        prompter.say(GREETING)?;
        let city: City = prompter.ask_until(CITY_QUESTION, |a| a.parse().ok())?;
        let option = prompter.ask_until(OPTION_QUESTION, FilterOption::parse)?;

        let mut criteria = FilterCriteria::new(city);
        if option.asks_month() {
            let month: MonthFilter = prompter.ask_until(MONTH_QUESTION, |a| a.parse().ok())?;
            criteria = criteria.with_month(month);
        }
        if option.asks_day() {
            let day: DayFilter = prompter.ask_until(DAY_QUESTION, |a| a.parse().ok())?;
            criteria = criteria.with_day(day);
        }
        prompter.say(RULE)?;
        Ok(criteria)
    }

    fn show_stats<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        dataset: &Dataset,
    ) -> crate::Result<()> {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            if i > 0 {
                prompter.pause(CONTINUE_PROMPT)?;
            }
            let result = run_section(dataset, section);
            prompter.say(&self.formatter.format_section(&result))?;
        }
        Ok(())
    }

    fn view_raw_data<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        dataset: &Dataset,
    ) -> crate::Result<()> {
        if !prompter.confirm(VIEW_QUESTION)? {
            return Ok(());
        }
        let size = prompter.ask_until(SIZE_QUESTION, parse_sample_size)?;

        let mut session = match self.seed {
            Some(seed) => SampleSession::with_seed(dataset, size, seed)?,
            None => SampleSession::new(dataset, size)?,
        };
        loop {
            let batch = session.next_sample();
            prompter.say(&self.formatter.format_batch(&batch))?;
            if batch.exhausted || !prompter.confirm(ANOTHER_QUESTION)? {
                return Ok(());
            }
        }
    }
}

/// A number in `1..=20`. Anything else, including an empty answer, is retried.
fn parse_sample_size(answer: &str) -> Option<usize> {
    answer
        .parse()
        .ok()
        .filter(|n| (MIN_SAMPLE_SIZE..=MAX_SAMPLE_SIZE).contains(n))
}

#[cfg(test)]
#[path = "explore_tests.rs"]
mod tests;
