//! Logging initialisation

use log::SetLoggerError;

/// Map a `-v` count to a default log filter
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` takes precedence over the `-v` count. Nothing is installed
/// when `quiet` is set. Fails if a logger is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<(), SetLoggerError> {
    if quiet {
        return Ok(());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level_for(verbose)))
        .format_timestamp(None)
        .try_init()
}
