//! Tokens command implementation

use super::LineEndingsArg;
use crate::config::CliConfig;
use crate::output::{JsonFormatter, TextFormatter, TokenFormatter};
use anyhow::{Context, Result};
use clap::Args;
use glossa_core::TokenStream;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Arguments for the tokens command
#[derive(Debug, Args)]
pub struct TokensArgs {
    /// Input file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Line-terminator handling
    #[arg(long, value_enum)]
    pub line_endings: Option<LineEndingsArg>,
}

/// Supported token dump formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One token per line with its kind
    Text,
    /// JSON array of tokens with kind and offset
    Json,
}

impl TokensArgs {
    /// Execute the tokens command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let file = File::open(&self.input)
            .with_context(|| format!("Failed to open input: {}", self.input.display()))?;
        let stdout = io::stdout();
        self.dump(config, BufReader::new(file), stdout.lock())
    }

    /// Tokenize `reader` and write the dump to `writer`
    pub fn dump<R: BufRead, W: Write>(&self, config: &CliConfig, reader: R, writer: W) -> Result<()> {
        let mut options = config.translation.tokenizer;
        if let Some(line_endings) = self.line_endings {
            options.line_endings = line_endings.into();
        }

        let stream = TokenStream::with_options(reader, options);
        let count = match self.format {
            OutputFormat::Text => self.write_tokens(stream, TextFormatter::new(writer))?,
            OutputFormat::Json => self.write_tokens(stream, JsonFormatter::new(writer))?,
        };

        log::info!("{count} tokens in {}", self.input.display());
        Ok(())
    }

    fn write_tokens<R: BufRead, F: TokenFormatter>(
        &self,
        stream: TokenStream<R>,
        mut formatter: F,
    ) -> Result<usize> {
        let mut count = 0;
        for token in stream {
            let token =
                token.with_context(|| format!("Failed to tokenize {}", self.input.display()))?;
            formatter.format_token(&token)?;
            count += 1;
        }
        formatter.finish()?;
        Ok(count)
    }
}
