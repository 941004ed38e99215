//! Lossless word/separator tokenization and word-for-word translation
//!
//! Text is split into maximal runs of word characters and separator
//! characters, one line at a time. Concatenating the runs gives back the
//! original text, so replacing word runs through a [`Dictionary`] and
//! joining the result keeps every space and punctuation mark in place.
//!
//! # Architecture
//!
//! - [`lexer`]: splits a single line into runs
//! - [`stream`]: drives the lexer over a reader and adds line terminators
//!   and the end-of-input sentinel
//! - [`dictionary`]: `key, value` dictionary files
//! - [`translator`]: lookup-or-passthrough over a token stream
//! - [`detokenizer`]: concatenates tokens back into text
//! - [`pipeline`]: wires the stages together
//!
//! # Example
//!
//! ```rust
//! use glossa_core::{tokenize_str, TokenizerOptions};
//!
//! let tokens = tokenize_str("Hello, world!", TokenizerOptions::default()).unwrap();
//! let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
//! assert_eq!(texts[..5], ["Hello", ", ", "world", "!", "\n"]);
//! assert!(tokens[5].is_end_of_input());
//! ```

pub mod detokenizer;
pub mod dictionary;
pub mod error;
pub mod lexer;
pub mod pipeline;
pub mod stream;
pub mod token;
pub mod translator;

pub use detokenizer::{detokenize_to_file, detokenize_to_string, Detokenizer};
pub use dictionary::{Dictionary, DictionaryLoader, Direction, LoadReport, MalformedEntryPolicy};
pub use error::{Error, Result};
pub use lexer::{next_word_or_separator, Lexer};
pub use pipeline::{Pipeline, PipelineBuilder, PipelineOptions};
pub use stream::{
    tokenize, tokenize_str, LineEndings, ReadErrorPolicy, TokenStream, TokenizerOptions,
};
pub use token::{is_separator, Token, TokenKind, END_OF_INPUT, LINE_TERMINATOR, SEPARATORS};
pub use translator::{Translate, TranslationStats, Translator};
