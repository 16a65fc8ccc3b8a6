//! Line-oriented input source and output sink
//!
//! Every prompt of a session goes through one [`Terminal`]. Production code
//! wraps stdin/stdout; tests wrap an in-memory cursor and buffer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{IfdbError, Result};

/// One reader and one writer shared by all prompts of a session
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Terminal over the process's standard streams
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one full line
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `text` without a newline and read one answer line
    ///
    /// The trailing line terminator is stripped; other whitespace is kept.
    ///
    /// # Errors
    /// - `InputClosed` if the input is at end of file
    /// - `Io` if reading or writing fails
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(IfdbError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Ask a yes/no question until the answer is one of y/yes/n/no
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let mut answer = self.prompt(question)?;
        loop {
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => answer = self.prompt("Please enter yes or no: ")?,
            }
        }
    }

    /// Consume the terminal and return the writer
    pub fn into_output(self) -> W {
        self.output
    }
}
