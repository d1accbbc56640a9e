use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a city table is read.
///
/// Hidden in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct LoadProgress {
    progress_bar: ProgressBar,
}

impl LoadProgress {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        if quiet || !is_tty {
            Self::hidden()
        } else {
            Self {
                progress_bar: Self::create_spinner(),
            }
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
        }
    }

    fn create_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let template = "{spinner:.green} {msg} {pos} rows";
        if let Ok(style) = ProgressStyle::default_spinner().template(template) {
            pb.set_style(style);
        }
        pb
    }

    /// Resets the counter and names the table being read.
    pub fn start(&self, location: &str) {
        self.progress_bar.set_position(0);
        self.progress_bar.set_message(format!("Loading {location}"));
        self.progress_bar.enable_steady_tick(Duration::from_millis(120));
    }

    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.progress_bar.is_hidden()
    }
}
