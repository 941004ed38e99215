//! Line-based interactive prompts

use crate::error::CliError;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Asks questions on `writer` and reads answers from `reader`
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `message` and read one line; the line break is stripped.
    ///
    /// End of input or an empty answer is reported as
    /// [`CliError::MissingInput`] naming `what`.
    pub fn ask(&mut self, message: &str, what: &str) -> Result<String> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;

        let mut answer = String::new();
        self.reader
            .read_line(&mut answer)
            .with_context(|| format!("Failed to read {what}"))?;

        let answer = answer.trim_end_matches(['\n', '\r']);
        if answer.is_empty() {
            return Err(CliError::MissingInput(what.to_string()).into());
        }
        Ok(answer.to_string())
    }
}
