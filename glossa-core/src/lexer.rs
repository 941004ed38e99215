//! Maximal-munch lexer over a single line of text
//!
//! The lexer partitions a line into alternating runs of word characters
//! and separator characters. Each run is as long as possible, so the
//! concatenation of the runs is always the original line.

use crate::error::{Error, Result};
use crate::token::is_separator;

/// Return the word or separator run starting at byte offset `position`.
///
/// The run contains every following character of the same class as the
/// character at `position` and stops at the end of `text` or at the first
/// character of the other class.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `position` is not strictly less than
/// `text.len()` or does not fall on a character boundary.
pub fn next_word_or_separator(text: &str, position: usize) -> Result<&str> {
    if position >= text.len() {
        return Err(Error::InvalidArgument(format!(
            "position {position} out of range for text of length {}",
            text.len()
        )));
    }
    if !text.is_char_boundary(position) {
        return Err(Error::InvalidArgument(format!(
            "position {position} is not on a character boundary"
        )));
    }

    let rest = &text[position..];
    let mut chars = rest.char_indices();
    // Non-empty: position < len and on a boundary
    let first_is_separator = chars.next().map(|(_, ch)| is_separator(ch)).unwrap_or(false);

    let end = chars
        .find(|&(_, ch)| is_separator(ch) != first_is_separator)
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());

    Ok(&rest[..end])
}

/// Iterator over the runs of one line
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `text`
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    /// Byte offset of the next run
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        // position always sits on a boundary inside the text here
        let run = next_word_or_separator(self.text, self.position).ok()?;
        self.position += run.len();
        Some(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_run() {
        assert_eq!(next_word_or_separator("Hello, world!", 0).unwrap(), "Hello");
    }

    #[test]
    fn test_separator_run() {
        assert_eq!(next_word_or_separator("Hello, world!", 5).unwrap(), ", ");
    }

    #[test]
    fn test_run_reaching_end_of_text() {
        assert_eq!(next_word_or_separator("Hello, world", 7).unwrap(), "world");
        assert_eq!(next_word_or_separator("Hello, world!", 12).unwrap(), "!");
    }

    #[test]
    fn test_run_starting_mid_word() {
        assert_eq!(next_word_or_separator("translate", 5).unwrap(), "late");
    }

    #[test]
    fn test_single_character_line() {
        assert_eq!(next_word_or_separator(";", 0).unwrap(), ";");
        assert_eq!(next_word_or_separator("x", 0).unwrap(), "x");
    }

    #[test]
    fn test_multibyte_characters() {
        let text = "świat, żółw";
        assert_eq!(next_word_or_separator(text, 0).unwrap(), "świat");
        let offset = "świat, ".len();
        assert_eq!(next_word_or_separator(text, offset).unwrap(), "żółw");
    }

    #[test]
    fn test_position_out_of_range() {
        assert!(matches!(
            next_word_or_separator("abc", 3),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            next_word_or_separator("", 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_position_inside_character() {
        // 'ś' is two bytes long
        assert!(matches!(
            next_word_or_separator("ś", 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_lexer_partitions_line() {
        let runs: Vec<&str> = Lexer::new("while(i < n) {").collect();
        assert_eq!(runs, vec!["while", "(", "i", " ", "<", " ", "n", ") {"]);
        assert_eq!(runs.concat(), "while(i < n) {");
    }

    #[test]
    fn test_lexer_on_empty_line() {
        assert_eq!(Lexer::new("").count(), 0);
    }

    #[test]
    fn test_lexer_tracks_position() {
        let mut lexer = Lexer::new("a b");
        lexer.next();
        assert_eq!(lexer.position(), 1);
        lexer.next();
        lexer.next();
        assert_eq!(lexer.position(), 3);
        assert_eq!(lexer.next(), None);
    }
}
