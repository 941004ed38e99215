//! Line-oriented stream tokenizer
//!
//! [`TokenStream`] reads its source one line at a time, yields the lexer
//! runs of each line followed by a line-terminator token, and finishes with
//! a single end-of-input sentinel. The stream is lazy and forward-only: a
//! line is only read once the tokens of the previous line are consumed.

use crate::error::{Error, Result};
use crate::lexer::next_word_or_separator;
use crate::token::{Token, LINE_TERMINATOR};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Cursor};
use std::iter::FusedIterator;

/// How line breaks are represented in the token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndings {
    /// Emit `"\n"` after every line, including a last line without one
    #[default]
    Canonical,
    /// Emit the terminator actually read (`"\n"` or `"\r\n"`), if any
    Preserve,
}

/// What to do when reading a line fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadErrorPolicy {
    /// Log the failure and end the stream as if the input was exhausted
    #[default]
    Truncate,
    /// Yield the failure to the caller and stop
    Abort,
}

/// Options for [`TokenStream`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Line-terminator representation
    pub line_endings: LineEndings,
    /// Read failure handling
    pub read_errors: ReadErrorPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Draining the current line or reading the next one
    Active,
    /// Input exhausted, sentinel not yet emitted
    Exhausted,
    /// Nothing more to yield
    Done,
}

/// Lazy token sequence over a buffered reader
#[derive(Debug)]
pub struct TokenStream<R> {
    reader: R,
    options: TokenizerOptions,
    line: String,
    position: usize,
    terminator: Option<&'static str>,
    lines_read: usize,
    state: State,
}

impl<R: BufRead> TokenStream<R> {
    /// Create a stream with default options
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, TokenizerOptions::default())
    }

    /// Create a stream with explicit options
    pub fn with_options(reader: R, options: TokenizerOptions) -> Self {
        Self {
            reader,
            options,
            line: String::new(),
            position: 0,
            terminator: None,
            lines_read: 0,
            state: State::Active,
        }
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Read the next line into the buffer. Returns false at end of input.
    fn read_line(&mut self) -> io::Result<bool> {
        let mut bytes = std::mem::take(&mut self.line).into_bytes();
        bytes.clear();
        self.position = 0;
        self.terminator = None;

        let raw_terminator = match read_raw_line(&mut self.reader, &mut bytes)? {
            RawLine::Eof => return Ok(false),
            RawLine::Line(terminator) => terminator,
        };
        self.line = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.lines_read += 1;

        self.terminator = match self.options.line_endings {
            LineEndings::Canonical => Some(LINE_TERMINATOR),
            LineEndings::Preserve => raw_terminator,
        };

        log::trace!("line {}: {} bytes", self.lines_read, self.line.len());
        Ok(true)
    }
}

enum RawLine {
    Eof,
    /// Line content was read, followed by this terminator if any
    Line(Option<&'static str>),
}

/// `fill_buf`, retried on `Interrupted`
fn fill<R: BufRead>(reader: &mut R) -> io::Result<&[u8]> {
    while let Err(e) = reader.fill_buf() {
        if e.kind() != io::ErrorKind::Interrupted {
            return Err(e);
        }
    }
    reader.fill_buf()
}

/// Append one line of raw bytes to `buf`.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`; the terminator is consumed
/// but not copied.
fn read_raw_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<RawLine> {
    let mut read_any = false;
    loop {
        let available = fill(reader)?;
        if available.is_empty() {
            return Ok(if read_any {
                RawLine::Line(None)
            } else {
                RawLine::Eof
            });
        }
        read_any = true;

        let Some(idx) = available.iter().position(|&b| b == b'\n' || b == b'\r') else {
            let len = available.len();
            buf.extend_from_slice(available);
            reader.consume(len);
            continue;
        };
        let is_carriage_return = available[idx] == b'\r';
        buf.extend_from_slice(&available[..idx]);
        reader.consume(idx + 1);

        if !is_carriage_return {
            return Ok(RawLine::Line(Some("\n")));
        }
        if fill(reader)?.first() == Some(&b'\n') {
            reader.consume(1);
            return Ok(RawLine::Line(Some("\r\n")));
        }
        return Ok(RawLine::Line(Some("\r")));
    }
}

impl<R: BufRead> Iterator for TokenStream<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Done => return None,
                State::Exhausted => {
                    self.state = State::Done;
                    log::debug!("end of input after {} lines", self.lines_read);
                    return Some(Ok(Token::end_of_input()));
                }
                State::Active => {}
            }

            if self.position < self.line.len() {
                return match next_word_or_separator(&self.line, self.position) {
                    Ok(run) => {
                        self.position += run.len();
                        Some(Ok(Token::from_lexeme(run)))
                    }
                    Err(err) => {
                        self.state = State::Done;
                        Some(Err(err))
                    }
                };
            }

            if let Some(terminator) = self.terminator.take() {
                return Some(Ok(Token::from_lexeme(terminator)));
            }

            match self.read_line() {
                Ok(true) => continue,
                Ok(false) => self.state = State::Exhausted,
                Err(source) => {
                    let line = self.lines_read + 1;
                    match self.options.read_errors {
                        ReadErrorPolicy::Truncate => {
                            log::warn!(
                                "failed to read line {line}: {source}; treating as end of input"
                            );
                            self.state = State::Exhausted;
                        }
                        ReadErrorPolicy::Abort => {
                            self.state = State::Done;
                            return Some(Err(Error::Read { line, source }));
                        }
                    }
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for TokenStream<R> {}

/// Tokenize a reader with default options
pub fn tokenize<R: BufRead>(reader: R) -> TokenStream<R> {
    TokenStream::new(reader)
}

/// Tokenize an in-memory string, collecting every token including the sentinel
pub fn tokenize_str(text: &str, options: TokenizerOptions) -> Result<Vec<Token>> {
    TokenStream::with_options(Cursor::new(text.as_bytes()), options).collect()
}
