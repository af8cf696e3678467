//! Line-oriented prompt I/O
//!
//! Wraps the input and output streams of an interactive session so the menu
//! can be driven by a terminal or by piped text in tests.

use std::io::{BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::error::ExpenseResult;

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter; screen clearing is off until enabled
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Enable or disable clearing the terminal between operations
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Print `message` and read one line
    ///
    /// Returns `None` at end of input. The line terminator is stripped but
    /// other whitespace is kept as typed.
    pub fn prompt(&mut self, message: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }

    /// Write text without a trailing newline
    pub fn print(&mut self, text: &str) -> ExpenseResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write one line of text
    pub fn say(&mut self, text: &str) -> ExpenseResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Wait for ENTER; returns `false` at end of input
    pub fn pause(&mut self) -> ExpenseResult<bool> {
        Ok(self.prompt("\nPress ENTER to continue...")?.is_some())
    }

    /// Clear the terminal if clearing is enabled
    pub fn clear(&mut self) -> ExpenseResult<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Consume the prompter and return the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}
