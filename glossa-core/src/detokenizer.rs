//! Reassembly of a token stream into text

use crate::error::{Error, Result};
use crate::token::Token;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes tokens to a sink by plain concatenation
#[derive(Debug)]
pub struct Detokenizer<W: Write> {
    writer: W,
    bytes_written: usize,
}

impl<W: Write> Detokenizer<W> {
    /// Create a detokenizer writing into `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bytes_written: 0,
        }
    }

    /// Write every token up to, but excluding, the end-of-input sentinel.
    ///
    /// Tokens after the sentinel are never pulled from the iterator. The
    /// writer is flushed before returning. Returns the number of bytes
    /// written by this call.
    pub fn write_tokens<I>(&mut self, tokens: I) -> Result<usize>
    where
        I: IntoIterator<Item = Result<Token>>,
    {
        let start = self.bytes_written;
        let mut terminated = false;

        for token in tokens {
            let token = token?;
            if token.is_end_of_input() {
                terminated = true;
                break;
            }
            self.writer
                .write_all(token.as_str().as_bytes())
                .map_err(Error::Write)?;
            self.bytes_written += token.len();
        }

        if !terminated {
            log::warn!("token stream ended without an end-of-input marker");
        }

        self.writer.flush().map_err(Error::Write)?;
        Ok(self.bytes_written - start)
    }

    /// Total bytes written through this detokenizer
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Detokenize into a file, creating or truncating it.
///
/// The file is closed when this function returns, on success and on error.
pub fn detokenize_to_file<I>(tokens: I, path: impl AsRef<Path>) -> Result<usize>
where
    I: IntoIterator<Item = Result<Token>>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut detokenizer = Detokenizer::new(BufWriter::new(file));
    let written = detokenizer.write_tokens(tokens)?;
    log::debug!("wrote {written} bytes to {}", path.display());
    Ok(written)
}

/// Detokenize into a `String`
pub fn detokenize_to_string<I>(tokens: I) -> Result<String>
where
    I: IntoIterator<Item = Result<Token>>,
{
    let mut detokenizer = Detokenizer::new(Vec::new());
    detokenizer.write_tokens(tokens)?;
    String::from_utf8(detokenizer.into_inner())
        .map_err(|e| Error::InvalidArgument(format!("detokenized output is not UTF-8: {e}")))
}
