//! CLI command implementations

use clap::Subcommand;
use glossa_core::LineEndings;

pub mod check_dict;
pub mod show_config;
pub mod tokens;
pub mod translate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate a text file word by word (prompts for missing file names)
    Translate(translate::TranslateArgs),

    /// Print the token stream of a file
    Tokens(tokens::TokensArgs),

    /// Validate a dictionary file
    CheckDict(check_dict::CheckDictArgs),

    /// Print the effective configuration as TOML
    Config(show_config::ShowConfigArgs),
}

/// Line-terminator handling selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LineEndingsArg {
    /// Emit "\n" after every line
    Canonical,
    /// Keep the line breaks found in the input
    Preserve,
}

impl From<LineEndingsArg> for LineEndings {
    fn from(arg: LineEndingsArg) -> Self {
        match arg {
            LineEndingsArg::Canonical => LineEndings::Canonical,
            LineEndingsArg::Preserve => LineEndings::Preserve,
        }
    }
}
