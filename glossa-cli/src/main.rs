//! Glossa command-line entry point

use anyhow::Result;
use clap::Parser;
use glossa_cli::commands::{translate::TranslateArgs, Commands};
use glossa_cli::config::CliConfig;
use glossa_cli::logging::init_logging;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true, env = "GLOSSA_CONFIG")]
    config: Option<PathBuf>,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Translate(args)) => args.execute(&config),
        Some(Commands::Tokens(args)) => args.execute(&config),
        Some(Commands::CheckDict(args)) => args.execute(&config),
        Some(Commands::Config(args)) => args.execute(&config),
        None => TranslateArgs::default().execute(&config),
    }
}
