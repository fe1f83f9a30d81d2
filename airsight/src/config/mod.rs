//! Application configuration loaded from ~/.airsight/config.ini.
//!
//! Values resolve in three layers: built-in defaults, overlaid by the
//! config file, overlaid by command-line flags (applied by the binary).
//! A missing config file is not an error; every setting has a default.

mod defaults;
mod file;
mod parser;
mod settings;

pub use defaults::{
    default_log_file, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_REFRESH_INTERVAL_SECS,
    DEFAULT_SHOW_STATIONS, DEFAULT_TIMEOUT_SECS,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, MapSettings, NetworkSettings, RefreshSettings};
