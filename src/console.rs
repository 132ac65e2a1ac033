//! Interactive terminal I/O: status lines, the test picker and the
//! overwrite prompt.
//!
//! Generic over its reader and writer so the prompts can be driven from
//! in-memory buffers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::errors::{ScaffoldError, ScaffoldResult};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: WriteColor> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a plain status line.
    pub fn say(&mut self, message: impl Display) -> ScaffoldResult<()> {
        writeln!(self.output, "{message}").map_err(stdout_error)
    }

    /// Prints a status line in bold green.
    pub fn success(&mut self, message: impl Display) -> ScaffoldResult<()> {
        self.colored(Color::Green, message)
    }

    /// Prints a status line in yellow.
    pub fn notice(&mut self, message: impl Display) -> ScaffoldResult<()> {
        self.colored(Color::Yellow, message)
    }

    fn colored(&mut self, color: Color, message: impl Display) -> ScaffoldResult<()> {
        let _ = self
            .output
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let written = writeln!(self.output, "{message}");
        let _ = self.output.reset();
        written.map_err(stdout_error)
    }

    /// Shows a numbered menu of `files` and asks for a choice.
    ///
    /// Returns `None` when the user quits with `q` or input ends. Invalid
    /// answers re-prompt without limit.
    pub fn select_test_file(&mut self, files: &[PathBuf]) -> ScaffoldResult<Option<PathBuf>> {
        self.say("Available test files:")?;
        for (i, path) in files.iter().enumerate() {
            self.say(format_args!("{}. {}", i + 1, path.display()))?;
        }

        loop {
            let Some(answer) = self.ask("\nSelect a test to edit (number) or 'q' to quit: ")? else {
                return Ok(None);
            };
            if answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=files.len()).contains(&n) => return Ok(Some(files[n - 1].clone())),
                Ok(_) => self.notice("Invalid selection. Please try again.")?,
                Err(_) => self.notice("Please enter a valid number.")?,
            }
        }
    }

    /// Asks whether to replace `path`; anything but a `y` answer declines.
    pub fn confirm_overwrite(&mut self, path: &Path) -> ScaffoldResult<bool> {
        let question = format!("File {} already exists. Overwrite? [y/N]: ", path.display());
        let answer = self.ask(&question)?.unwrap_or_default();
        Ok(answer.to_lowercase().starts_with('y'))
    }

    /// Writes `question` and reads one trimmed line, `None` at end of input.
    fn ask(&mut self, question: &str) -> ScaffoldResult<Option<String>> {
        write!(self.output, "{question}")
            .and_then(|()| self.output.flush())
            .map_err(stdout_error)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ScaffoldError::io("read", "<stdin>", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn stdout_error(e: io::Error) -> ScaffoldError {
    ScaffoldError::io("write", "<stdout>", e)
}
