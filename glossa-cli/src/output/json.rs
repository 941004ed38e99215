//! JSON token formatter

use super::TokenFormatter;
use anyhow::Result;
use glossa_core::{Token, TokenKind};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs tokens as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    tokens: Vec<TokenData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct TokenData {
    /// Token class
    pub kind: TokenKind,
    /// Token text
    pub text: Token,
    /// Byte offset of the token in the token stream's concatenation
    pub offset: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tokens: Vec::new(),
        }
    }
}

impl<W: Write> TokenFormatter for JsonFormatter<W> {
    fn format_token(&mut self, token: &Token) -> Result<()> {
        let offset = self
            .tokens
            .last()
            .map(|t| t.offset + t.text.len())
            .unwrap_or(0);
        self.tokens.push(TokenData {
            kind: token.kind(),
            text: token.clone(),
            offset,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.tokens)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_array() {
        let mut out = Vec::new();
        let mut formatter = JsonFormatter::new(&mut out);
        for text in ["Hello", ", ", "world"] {
            formatter.format_token(&Token::new(text).unwrap()).unwrap();
        }
        formatter.format_token(&Token::end_of_input()).unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["kind"], "word");
        assert_eq!(items[1]["text"], ", ");
        assert_eq!(items[2]["offset"], 7);
        assert_eq!(items[3]["kind"], "end-of-input");
    }
}
