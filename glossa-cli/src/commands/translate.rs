//! Translate command implementation

use super::LineEndingsArg;
use crate::config::CliConfig;
use crate::prompt::Prompter;
use anyhow::{Context, Result};
use clap::Args;
use glossa_core::{
    Direction, MalformedEntryPolicy, Pipeline, PipelineOptions, ReadErrorPolicy, Translator,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Arguments for the translate command
#[derive(Debug, Args, Default)]
pub struct TranslateArgs {
    /// Input file (prompted for when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (prompted for when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Dictionary file
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Directory that prompted file names are resolved against
    #[arg(short, long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Look words up in the right-hand dictionary column
    #[arg(short, long)]
    pub reverse: bool,

    /// Line-terminator handling
    #[arg(long, value_enum)]
    pub line_endings: Option<LineEndingsArg>,

    /// Fail on malformed dictionary lines and on read errors
    #[arg(long)]
    pub strict: bool,
}

/// Resolved input and output locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    /// File to translate
    pub input: PathBuf,
    /// File to write
    pub output: PathBuf,
}

impl TranslateArgs {
    /// Execute the translate command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let files = if self.input.is_some() && self.output.is_some() {
            self.resolve_files(config, &mut Prompter::new(io::empty(), io::sink()))?
        } else {
            let stdin = io::stdin();
            let stdout = io::stdout();
            self.resolve_files(config, &mut Prompter::new(stdin.lock(), stdout.lock()))?
        };

        let options = self.pipeline_options(config);
        let dictionary_path = self.dictionary_path(config);
        let (dictionary, report) = options
            .loader()
            .load_file_with_report(&dictionary_path)
            .with_context(|| {
                format!("Failed to load dictionary: {}", dictionary_path.display())
            })?;
        log::debug!("dictionary report: {report:?}");

        let pipeline = Pipeline::new(Translator::new(dictionary), options.tokenizer);
        let stats = pipeline
            .run_files(&files.input, &files.output)
            .with_context(|| format!("Failed to translate {}", files.input.display()))?;

        log::info!(
            "{} -> {}: {} of {} words translated",
            files.input.display(),
            files.output.display(),
            stats.translated,
            stats.words
        );
        Ok(())
    }

    /// Merge command-line flags over the configuration file
    pub fn pipeline_options(&self, config: &CliConfig) -> PipelineOptions {
        let mut options = config.translation;
        if self.reverse {
            options.direction = Direction::Reverse;
        }
        if let Some(line_endings) = self.line_endings {
            options.tokenizer.line_endings = line_endings.into();
        }
        if self.strict {
            options.malformed_entries = MalformedEntryPolicy::Reject;
            options.tokenizer.read_errors = ReadErrorPolicy::Abort;
        }
        options
    }

    /// Dictionary given on the command line, else the configured one
    pub fn dictionary_path(&self, config: &CliConfig) -> PathBuf {
        self.dictionary
            .clone()
            .unwrap_or_else(|| config.paths.dictionary.clone())
    }

    /// Work out input and output paths, prompting for missing ones.
    ///
    /// Paths given as flags are used as they are. Prompted names are
    /// resolved against the working directory.
    pub fn resolve_files<R: BufRead, W: Write>(
        &self,
        config: &CliConfig,
        prompter: &mut Prompter<R, W>,
    ) -> Result<FilePair> {
        let working_dir = self
            .working_dir
            .as_deref()
            .unwrap_or(&config.paths.working_dir);

        let input = match &self.input {
            Some(path) => path.clone(),
            None => resolve(
                working_dir,
                &prompter.ask("Enter input file name: ", "input file name")?,
            ),
        };
        let output = match &self.output {
            Some(path) => path.clone(),
            None => resolve(
                working_dir,
                &prompter.ask("Enter output file name: ", "output file name")?,
            ),
        };

        Ok(FilePair { input, output })
    }
}

fn resolve(working_dir: &Path, name: &str) -> PathBuf {
    working_dir.join(name)
}
