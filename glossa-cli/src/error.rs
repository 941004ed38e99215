//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    ConfigError(String),
    /// A required file name was not supplied
    MissingInput(String),
    /// Dictionary validation found problems
    InvalidDictionary(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MissingInput(what) => write!(f, "No {what} given"),
            CliError::InvalidDictionary(msg) => write!(f, "Invalid dictionary: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_missing_input_display() {
        let error = CliError::MissingInput("input file name".to_string());
        assert_eq!(error.to_string(), "No input file name given");
    }

    #[test]
    fn test_invalid_dictionary_display() {
        let error = CliError::InvalidDictionary("2 malformed lines".to_string());
        assert_eq!(error.to_string(), "Invalid dictionary: 2 malformed lines");
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::MissingInput("output file name".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "No output file name given");
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::ConfigError("plik słownika/ż.toml".to_string());
        assert_eq!(error.to_string(), "Configuration error: plik słownika/ż.toml");
    }
}
