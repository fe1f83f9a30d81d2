//! CLI runner for common setup.
//!
//! Encapsulates configuration loading and logging initialization so the
//! run path starts from one place.

use std::path::{Path, PathBuf};

use tracing::info;

use airsight::config::ConfigFile;
use airsight::logging::{init_file_logging, init_logging, LoggingGuard};

use crate::error::CliError;

/// Runner that manages CLI lifecycle.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// The dashboard owns stdout, so logging stays file-only unless the
    /// process runs headless.
    pub fn new(
        config_path: Option<&Path>,
        log_file: Option<&PathBuf>,
        headless: bool,
    ) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = match config_path {
            Some(path) => ConfigFile::load_from(path),
            None => ConfigFile::load(),
        }?;

        let log_path = log_file
            .cloned()
            .unwrap_or_else(|| config.logging.file.clone());

        let logging_guard = if headless {
            init_logging(&log_path)
        } else {
            init_file_logging(&log_path)
        }
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information.
    pub fn log_startup(&self, mode: &str) {
        info!("AirSight v{}", airsight::VERSION);
        info!(mode, "AirSight CLI starting");
    }
}
