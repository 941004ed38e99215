//! Error types for tokenization, dictionary loading and translation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the glossa pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// An input, dictionary or output file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    FileOpen {
        /// The path that could not be opened
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading a line failed
    #[error("failed to read line {line}: {source}")]
    Read {
        /// 1-based number of the line being read
        line: usize,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing output failed
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    /// A dictionary line lacks the `key, value` delimiter
    #[error("malformed dictionary entry on line {line}: {content:?}")]
    MalformedEntry {
        /// 1-based line number in the dictionary source
        line: usize,
        /// The offending line
        content: String,
    },

    /// A precondition was violated by the caller
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for glossa operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_display() {
        let error = Error::FileOpen {
            path: PathBuf::from("testfiles/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            error.to_string(),
            "failed to open testfiles/missing.txt: not found"
        );
    }

    #[test]
    fn test_malformed_entry_display() {
        let error = Error::MalformedEntry {
            line: 3,
            content: "while podczas".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "malformed dictionary entry on line 3: \"while podczas\""
        );
    }

    #[test]
    fn test_read_error_keeps_source() {
        use std::error::Error as _;

        let error = Error::Read {
            line: 7,
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert!(error.to_string().starts_with("failed to read line 7"));
        assert!(error.source().is_some());
    }
}
