//! Console I/O for the interactive menu
//!
//! Input is consumed as whitespace-separated tokens, so several answers can
//! be typed on one line ("1 741 8 0.5"). End of input is reported as `None`.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use super::errors::CliResult;

/// Token reader and writer over any buffered input and output
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Next input token, reading more lines as needed
    pub fn next_token(&mut self) -> CliResult<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Writes `text` without a newline, flushes, and reads one token
    pub fn prompt(&mut self, text: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.next_token()
    }

    /// Writes one line
    pub fn say(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
