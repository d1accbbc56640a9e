//! Line-oriented question/answer over any reader and writer.

use std::io::{BufRead, Write};

use crate::{BikeshareError, Result};

/// Printed before repeating a question whose answer was rejected.
pub const RETRY_MESSAGE: &str = "Wrong Entry!";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes `text` followed by a newline.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Asks once; returns the answer trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `InputClosed` at end of input, or an IO error.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_lowercase())
    }

    /// Asks until `parse` accepts the answer.
    ///
    /// # Errors
    /// Returns `InputClosed` if input ends first, or an IO error.
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            self.say(RETRY_MESSAGE)?;
        }
    }

    /// True only when the answer is `y`.
    ///
    /// # Errors
    /// Returns `InputClosed` if input ends first, or an IO error.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self.ask(question)? == "y")
    }

    /// Waits for any line. End of input does not count as an error here.
    ///
    /// # Errors
    /// Returns an IO error if reading fails.
    pub fn pause(&mut self, message: &str) -> Result<()> {
        match self.ask(message) {
            Ok(_) | Err(BikeshareError::InputClosed) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
