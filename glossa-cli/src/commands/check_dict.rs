//! Check-dict command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use glossa_core::{Direction, DictionaryLoader, LoadReport, MalformedEntryPolicy};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the check-dict command
#[derive(Debug, Args)]
pub struct CheckDictArgs {
    /// Dictionary file to validate (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Check the dictionary as used for reverse lookups
    #[arg(short, long)]
    pub reverse: bool,
}

impl CheckDictArgs {
    /// Execute the check-dict command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let path = self
            .dictionary
            .clone()
            .unwrap_or_else(|| config.paths.dictionary.clone());
        let direction = if self.reverse {
            Direction::Reverse
        } else {
            config.translation.direction
        };

        let loader = DictionaryLoader::new()
            .direction(direction)
            .malformed_entries(MalformedEntryPolicy::Skip);
        let (dictionary, report) = loader
            .load_file_with_report(&path)
            .with_context(|| format!("Failed to load dictionary: {}", path.display()))?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "Checking dictionary: {}", path.display())?;
        write_report(&mut out, dictionary.len(), &report)?;
        verdict(&mut out, &report)
    }
}

/// Write a human-readable summary of a dictionary load
pub fn write_report<W: Write>(out: &mut W, unique_keys: usize, report: &LoadReport) -> Result<()> {
    writeln!(out, "  Entries:           {}", report.entries)?;
    writeln!(out, "  Unique keys:       {unique_keys}")?;
    writeln!(out, "  Blank lines:       {}", report.skipped_blank)?;
    writeln!(out, "  Incomplete lines:  {}", report.skipped_incomplete)?;
    writeln!(out, "  Malformed lines:   {}", report.skipped_malformed)?;
    Ok(())
}

/// Write the outcome line, failing when the report shows malformed lines
pub fn verdict<W: Write>(out: &mut W, report: &LoadReport) -> Result<()> {
    if report.skipped_malformed > 0 {
        writeln!(out, "✗ Dictionary has malformed lines")?;
        return Err(CliError::InvalidDictionary(format!(
            "{} line(s) without a comma",
            report.skipped_malformed
        ))
        .into());
    }
    writeln!(out, "✓ Dictionary is valid!")?;
    Ok(())
}
