//! Config command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;

/// Arguments for the config command
#[derive(Debug, Args)]
pub struct ShowConfigArgs {
    /// Print built-in defaults instead of the loaded configuration
    #[arg(long)]
    pub defaults: bool,
}

impl ShowConfigArgs {
    /// Execute the config command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        print!("{}", self.render(config)?);
        Ok(())
    }

    /// TOML text this command prints
    pub fn render(&self, config: &CliConfig) -> Result<String> {
        if self.defaults {
            CliConfig::default().to_toml()
        } else {
            config.to_toml()
        }
    }
}
