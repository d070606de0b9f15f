//! Command-line interface parsing for skycast
//!
//! This module parses CLI arguments with clap and validates them into the
//! runtime configuration used by the main loop.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::data::locations;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The refresh interval cannot be zero
    #[error("Invalid refresh interval: {0} seconds (must be at least 1)")]
    InvalidInterval(u64),
}

/// skycast - view current, hourly and daily weather forecasts
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Open-Meteo weather forecasts for the terminal")]
#[command(version)]
pub struct Cli {
    /// Location key (IANA timezone) to fetch the forecast for
    ///
    /// Unknown keys fall back to the default location's coordinates.
    #[arg(long, default_value = locations::DEFAULT_LOCATION)]
    pub location: String,

    /// Keep running and refresh the forecast periodically
    #[arg(long)]
    pub watch: bool,

    /// List the supported location keys and exit
    #[arg(long)]
    pub list_locations: bool,

    /// Refresh interval in seconds for watch mode
    #[arg(long, value_name = "SECONDS", default_value_t = 300)]
    pub interval: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated runtime configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Location key used for every fetch
    pub location: String,
    /// Whether to run the periodic watch loop
    pub watch: bool,
    /// Print the location table instead of fetching
    pub list_locations: bool,
    /// Refresh interval for watch mode
    pub interval: Duration,
    /// Whether debug logging is enabled
    pub verbose: bool,
}

impl RunConfig {
    /// Creates a RunConfig from parsed CLI arguments
    ///
    /// # Returns
    /// * `Ok(RunConfig)` with validated settings
    /// * `Err(CliError)` if the interval is zero
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.interval == 0 {
            return Err(CliError::InvalidInterval(cli.interval));
        }

        Ok(Self {
            location: cli.location.clone(),
            watch: cli.watch,
            list_locations: cli.list_locations,
            interval: Duration::from_secs(cli.interval),
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["skycast"]);
        assert_eq!(cli.location, locations::DEFAULT_LOCATION);
        assert!(!cli.watch);
        assert_eq!(cli.interval, 300);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_location_and_watch() {
        let cli = Cli::parse_from(["skycast", "--location", "Europe/Riga", "--watch"]);
        assert_eq!(cli.location, "Europe/Riga");
        assert!(cli.watch);
    }

    #[test]
    fn test_cli_parse_custom_interval() {
        let cli = Cli::parse_from(["skycast", "--interval", "60"]);
        assert_eq!(cli.interval, 60);
    }

    #[test]
    fn test_run_config_from_cli_defaults() {
        let cli = Cli::parse_from(["skycast"]);
        let config = RunConfig::from_cli(&cli).unwrap();
        assert_eq!(config.location, locations::DEFAULT_LOCATION);
        assert!(!config.watch);
        assert_eq!(config.interval, Duration::from_secs(300));
    }

    #[test]
    fn test_run_config_rejects_zero_interval() {
        let cli = Cli::parse_from(["skycast", "--interval", "0"]);
        let result = RunConfig::from_cli(&cli);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid refresh interval"));
    }

    #[test]
    fn test_cli_parse_list_locations() {
        let cli = Cli::parse_from(["skycast", "--list-locations"]);
        assert!(cli.list_locations);
        let config = RunConfig::from_cli(&cli).unwrap();
        assert!(config.list_locations);
    }

    #[test]
    fn test_run_config_accepts_unknown_location() {
        // Unknown keys are resolved at fetch time, not rejected here
        let cli = Cli::parse_from(["skycast", "--location", "Pacific/Nowhere"]);
        let config = RunConfig::from_cli(&cli).unwrap();
        assert_eq!(config.location, "Pacific/Nowhere");
    }
}
