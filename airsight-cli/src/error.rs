//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use airsight::config::ConfigFileError;
use airsight::coord::CoordError;
use airsight::fetch::FetchError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file error
    Config(ConfigFileError),
    /// Monitored location is outside the valid coordinate range
    Coordinate(CoordError),
    /// Failed to build the async runtime
    Runtime(std::io::Error),
    /// Failed to build the HTTP client
    Network(FetchError),
    /// Terminal or dashboard I/O error
    Terminal(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Check your configuration file:");
                eprintln!("  {}", airsight::config::config_file_path().display());
            }
            CliError::Coordinate(_) => {
                eprintln!();
                eprintln!("Latitude must be between -90 and 90 degrees,");
                eprintln!("longitude between -180 and 180 degrees.");
            }
            CliError::Terminal(_) => {
                eprintln!();
                eprintln!("If your terminal does not support the dashboard,");
                eprintln!("run with --headless instead.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Coordinate(e) => write!(f, "Invalid location: {}", e),
            CliError::Runtime(e) => write!(f, "Failed to start async runtime: {}", e),
            CliError::Network(e) => write!(f, "Network setup failed: {}", e),
            CliError::Terminal(e) => write!(f, "Terminal error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Coordinate(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            CliError::Network(e) => Some(e),
            CliError::Terminal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coordinate(e)
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        CliError::Network(e)
    }
}
