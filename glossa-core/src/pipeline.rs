//! End-to-end translation: tokenize, translate, detokenize
//!
//! # Example
//!
//! ```rust
//! use glossa_core::{Dictionary, Pipeline};
//!
//! let dictionary: Dictionary = [("Hello", "Witaj"), ("world", "świat")]
//!     .into_iter()
//!     .collect();
//! let pipeline = Pipeline::builder().dictionary(dictionary).build();
//!
//! let output = pipeline.translate_str("Hello, world!").unwrap();
//! assert_eq!(output, "Witaj, świat!\n");
//! ```

use crate::detokenizer::Detokenizer;
use crate::dictionary::{Dictionary, DictionaryLoader, Direction, MalformedEntryPolicy};
use crate::error::{Error, Result};
use crate::stream::{LineEndings, ReadErrorPolicy, TokenStream, TokenizerOptions};
use crate::translator::{TranslationStats, Translator};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Every knob of a translation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Tokenizer behaviour
    #[serde(flatten)]
    pub tokenizer: TokenizerOptions,
    /// Dictionary lookup direction
    pub direction: Direction,
    /// Dictionary malformed-line handling
    pub malformed_entries: MalformedEntryPolicy,
}

impl PipelineOptions {
    /// Dictionary loader configured from these options
    pub fn loader(&self) -> DictionaryLoader {
        DictionaryLoader::new()
            .direction(self.direction)
            .malformed_entries(self.malformed_entries)
    }
}

/// A configured translation run
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    translator: Translator,
    tokenizer: TokenizerOptions,
}

impl Pipeline {
    /// Create a pipeline from a translator and tokenizer options
    pub fn new(translator: Translator, tokenizer: TokenizerOptions) -> Self {
        Self {
            translator,
            tokenizer,
        }
    }

    /// Start building a pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Load the dictionary at `path` and build a pipeline from `options`
    pub fn from_dictionary_file(path: impl AsRef<Path>, options: PipelineOptions) -> Result<Self> {
        let dictionary = options.loader().load_file(path)?;
        Ok(Self::new(Translator::new(dictionary), options.tokenizer))
    }

    /// Translate everything from `reader` into `writer`
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<TranslationStats> {
        let stream = TokenStream::with_options(reader, self.tokenizer);
        let mut translated = self.translator.translate(stream);
        let mut detokenizer = Detokenizer::new(writer);
        let bytes = detokenizer.write_tokens(translated.by_ref())?;

        let stats = translated.stats();
        log::info!(
            "translated {} of {} words across {} lines ({bytes} bytes written)",
            stats.translated,
            stats.words,
            stats.lines
        );
        Ok(stats)
    }

    /// Translate the file at `input` into the file at `output`.
    ///
    /// The input is opened before the output is created, so a missing input
    /// never truncates an existing output file. When both paths name the
    /// same file the result goes to a temporary file in the same directory,
    /// which then replaces the input.
    pub fn run_files(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<TranslationStats> {
        let input = input.as_ref();
        let output = output.as_ref();

        let reader = File::open(input).map_err(|source| Error::FileOpen {
            path: input.to_path_buf(),
            source,
        })?;
        if is_same_file(input, output) {
            log::debug!("translating {} in place", input.display());
            return self.run_in_place(BufReader::new(reader), output);
        }

        let writer = File::create(output).map_err(|source| Error::FileOpen {
            path: output.to_path_buf(),
            source,
        })?;

        log::debug!("translating {} -> {}", input.display(), output.display());
        self.run(BufReader::new(reader), BufWriter::new(writer))
    }

    fn run_in_place<R: BufRead>(&self, reader: R, path: &Path) -> Result<TranslationStats> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir).map_err(|source| Error::FileOpen {
            path: dir.to_path_buf(),
            source,
        })?;

        let stats = self.run(reader, BufWriter::new(temp.as_file()))?;
        temp.persist(path).map_err(|e| Error::Write(e.error))?;
        Ok(stats)
    }

    /// Translate an in-memory string
    pub fn translate_str(&self, text: &str) -> Result<String> {
        let mut output = Vec::with_capacity(text.len() + 1);
        self.run(Cursor::new(text.as_bytes()), &mut output)?;
        String::from_utf8(output)
            .map_err(|e| Error::InvalidArgument(format!("translated output is not UTF-8: {e}")))
    }
}

/// True when both paths resolve to one existing file
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Builder for [`Pipeline`]
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    dictionary: Dictionary,
    tokenizer: TokenizerOptions,
}

impl PipelineBuilder {
    /// Set the dictionary
    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Set the line-terminator representation
    pub fn line_endings(mut self, line_endings: LineEndings) -> Self {
        self.tokenizer.line_endings = line_endings;
        self
    }

    /// Set the read-failure policy
    pub fn read_errors(mut self, policy: ReadErrorPolicy) -> Self {
        self.tokenizer.read_errors = policy;
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Pipeline {
        Pipeline::new(Translator::new(self.dictionary), self.tokenizer)
    }
}
