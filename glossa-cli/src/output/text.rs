//! Plain text token formatter

use super::TokenFormatter;
use anyhow::Result;
use glossa_core::Token;
use std::io::Write;

/// Plain text formatter - one `kind<TAB>"text"` line per token
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TokenFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &Token) -> Result<()> {
        writeln!(self.writer, "{}\t{:?}", token.kind(), token.as_str())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
