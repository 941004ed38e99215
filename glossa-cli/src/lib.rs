//! Glossa CLI library
//!
//! This library provides the command-line interface for the glossa
//! word-for-word translator.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;

pub use error::{CliError, CliResult};
