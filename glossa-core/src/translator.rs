//! Token-by-token dictionary substitution

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::token::{Token, TokenKind, END_OF_INPUT};

/// Replaces tokens that are dictionary keys with their translation
#[derive(Debug, Clone, Default)]
pub struct Translator {
    dictionary: Dictionary,
}

impl Translator {
    /// Create a translator owning `dictionary`
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// The dictionary used for lookups
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Translate one token.
    ///
    /// Every token is looked up, whatever its class, except the
    /// end-of-input sentinel. Tokens without an entry come back unchanged,
    /// and so do tokens whose entry would forge the sentinel.
    pub fn translate_token(&self, token: Token) -> Token {
        self.replacement(&token).unwrap_or(token)
    }

    fn replacement(&self, token: &Token) -> Option<Token> {
        if token.is_end_of_input() {
            return None;
        }
        let value = self.dictionary.get(token.as_str())?;
        // The sentinel text is reserved for the real end of the stream
        if value == END_OF_INPUT {
            return None;
        }
        Token::new(value).ok()
    }

    /// Lazily translate a token stream, preserving length and order
    pub fn translate<I>(&self, tokens: I) -> Translate<'_, I::IntoIter>
    where
        I: IntoIterator<Item = Result<Token>>,
    {
        Translate {
            translator: self,
            tokens: tokens.into_iter(),
            stats: TranslationStats::default(),
        }
    }
}

/// Counters for one translation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationStats {
    /// Tokens seen, sentinel included
    pub tokens: usize,
    /// Word tokens seen
    pub words: usize,
    /// Tokens replaced from the dictionary
    pub translated: usize,
    /// Line-terminator tokens seen
    pub lines: usize,
}

impl TranslationStats {
    fn record(&mut self, original: &Token, translated: bool) {
        self.tokens += 1;
        match original.kind() {
            TokenKind::Word => self.words += 1,
            TokenKind::LineTerminator => self.lines += 1,
            TokenKind::Separator | TokenKind::EndOfInput => {}
        }
        if translated {
            self.translated += 1;
        }
    }
}

/// Iterator adapter returned by [`Translator::translate`]
#[derive(Debug)]
pub struct Translate<'a, I> {
    translator: &'a Translator,
    tokens: I,
    stats: TranslationStats,
}

impl<I> Translate<'_, I> {
    /// Counters for the tokens yielded so far
    pub fn stats(&self) -> TranslationStats {
        self.stats
    }
}

impl<I> Iterator for Translate<'_, I>
where
    I: Iterator<Item = Result<Token>>,
{
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = match self.tokens.next()? {
            Ok(token) => token,
            Err(err) => return Some(Err(err)),
        };
        let replacement = self.translator.replacement(&token);
        self.stats.record(&token, replacement.is_some());
        Some(Ok(replacement.unwrap_or(token)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}
