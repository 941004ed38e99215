//! Configuration module

use crate::error::CliError;
use anyhow::Result;
use glossa_core::PipelineOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// File locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Tokenizer and dictionary behaviour
    #[serde(default)]
    pub translation: PipelineOptions,
}

/// Path-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory that prompted file names are resolved against
    pub working_dir: PathBuf,

    /// Dictionary file
    pub dictionary: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("testfiles"),
            dictionary: PathBuf::from("data/PolishDictionary2.txt"),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("Failed to read file '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content).map_err(|e| {
            CliError::ConfigError(format!("Failed to parse TOML from '{}': {e}", path.display()))
                .into()
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
