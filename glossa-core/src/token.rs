//! Tokens and the separator alphabet
//!
//! A token is a non-empty run of characters that are either all in the
//! separator alphabet or all outside of it. Its class is never stored; it
//! is derived from the text on demand.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Characters that split words
pub const SEPARATORS: &str = " \t\n\r,.{}();:*&|-+=[]!";

/// Text of the sentinel token appended after the last line.
///
/// The embedded spaces would be split off by the lexer, so this token can
/// never be produced from input text.
pub const END_OF_INPUT: &str = "### END OF INPUT ###";

/// Canonical text of the token emitted for every line break
pub const LINE_TERMINATOR: &str = "\n";

/// Returns true if `ch` belongs to the separator alphabet
#[inline]
pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(ch)
}

/// Class of a token, derived from its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Run of non-separator characters
    Word,
    /// Run of separator characters
    Separator,
    /// Line break emitted after each line
    LineTerminator,
    /// End-of-stream sentinel
    EndOfInput,
}

impl TokenKind {
    /// Lowercase name used in token dumps
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Separator => "separator",
            TokenKind::LineTerminator => "line-terminator",
            TokenKind::EndOfInput => "end-of-input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable, non-empty piece of text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Create a token, rejecting empty text
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::InvalidArgument(
                "token text must not be empty".to_string(),
            ));
        }
        Ok(Self(text))
    }

    /// Caller guarantees `text` is non-empty
    pub(crate) fn from_lexeme(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty());
        Self(text)
    }

    /// The end-of-stream sentinel
    pub fn end_of_input() -> Self {
        Self(END_OF_INPUT.to_string())
    }

    /// The canonical line-terminator token
    pub fn line_terminator() -> Self {
        Self(LINE_TERMINATOR.to_string())
    }

    /// Token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning its text
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; tokens are never empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classify the token by its content
    pub fn kind(&self) -> TokenKind {
        match self.0.as_str() {
            END_OF_INPUT => TokenKind::EndOfInput,
            "\n" | "\r\n" | "\r" => TokenKind::LineTerminator,
            text if text.chars().all(is_separator) => TokenKind::Separator,
            _ => TokenKind::Word,
        }
    }

    /// True for word tokens
    pub fn is_word(&self) -> bool {
        self.kind() == TokenKind::Word
    }

    /// True for separator runs (line terminators excluded)
    pub fn is_separator(&self) -> bool {
        self.kind() == TokenKind::Separator
    }

    /// True for line-terminator tokens
    pub fn is_line_terminator(&self) -> bool {
        self.kind() == TokenKind::LineTerminator
    }

    /// True for the end-of-stream sentinel
    pub fn is_end_of_input(&self) -> bool {
        self.0 == END_OF_INPUT
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_alphabet() {
        for ch in " \t\n\r,.{}();:*&|-+=[]!".chars() {
            assert!(is_separator(ch), "{ch:?} should be a separator");
        }
        for ch in ['a', 'Z', '0', '_', '#', '"', '\'', '<', '>', '/', 'ś', '世'] {
            assert!(!is_separator(ch), "{ch:?} should not be a separator");
        }
    }

    #[test]
    fn test_kind_from_content() {
        assert_eq!(Token::new("Hello").unwrap().kind(), TokenKind::Word);
        assert_eq!(Token::new(", ").unwrap().kind(), TokenKind::Separator);
        assert_eq!(Token::new("\n").unwrap().kind(), TokenKind::LineTerminator);
        assert_eq!(Token::new("\r\n").unwrap().kind(), TokenKind::LineTerminator);
        assert_eq!(Token::new("\r").unwrap().kind(), TokenKind::LineTerminator);
        assert_eq!(Token::end_of_input().kind(), TokenKind::EndOfInput);
        assert_eq!(Token::line_terminator().as_str(), "\n");
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(Token::new(""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_end_of_input_is_not_a_single_lexeme() {
        // The sentinel mixes word and separator characters
        assert!(END_OF_INPUT.chars().any(is_separator));
        assert!(END_OF_INPUT.chars().any(|c| !is_separator(c)));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::LineTerminator.to_string(), "line-terminator");
        assert_eq!(TokenKind::EndOfInput.to_string(), "end-of-input");
    }
}
