//! Logging setup
//!
//! Configures the log4rs console appender on stderr so forecast output on
//! stdout stays clean for piping.

use log::{LevelFilter, SetLoggerError};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use thiserror::Error;

/// Errors while setting up logging
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log4rs configuration was rejected
    #[error("invalid logging configuration: {0}")]
    Config(#[from] ConfigErrors),

    /// A global logger was already installed
    #[error("logger already initialized: {0}")]
    Init(#[from] SetLoggerError),
}

/// Initializes the global logger
///
/// # Arguments
/// * `verbose` - Log at debug level instead of info
pub fn init(verbose: bool) -> Result<(), LoggingError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = build_config(level)?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Builds the log4rs configuration for the given level
fn build_config(level: LevelFilter) -> Result<Config, ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_accepts_both_levels() {
        assert!(build_config(LevelFilter::Info).is_ok());
        assert!(build_config(LevelFilter::Debug).is_ok());
    }
}
