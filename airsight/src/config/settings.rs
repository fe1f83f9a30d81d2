//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::coord::{CoordError, GeoPoint};
use crate::layer::MapLayer;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Map view settings
    pub map: MapSettings,
    /// Data service settings
    pub network: NetworkSettings,
    /// Periodic refresh settings
    pub refresh: RefreshSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Map view configuration.
#[derive(Debug, Clone)]
pub struct MapSettings {
    /// Reference latitude in degrees.
    pub latitude: f64,
    /// Reference longitude in degrees.
    pub longitude: f64,
    /// Layer active at startup: "aqi", "satellite", "ground",
    /// "comparison", or "pollutants".
    pub default_layer: MapLayer,
    /// Whether monitoring station markers start visible.
    pub show_stations: bool,
}

impl MapSettings {
    /// Validated reference point for the configured coordinates.
    pub fn reference(&self) -> Result<GeoPoint, CoordError> {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Data service configuration.
#[derive(Debug, Clone)]
pub struct NetworkSettings {
    /// Base URL of the air quality data service.
    pub base_url: String,
    /// Timeout in seconds for HTTP requests.
    pub timeout_secs: u64,
}

/// Periodic refresh configuration.
#[derive(Debug, Clone)]
pub struct RefreshSettings {
    /// Seconds between automatic refresh rounds. 0 disables periodic
    /// refresh; data then only loads at startup and on manual refresh.
    pub interval_secs: u64,
}

impl RefreshSettings {
    /// True when periodic refresh is enabled.
    pub fn enabled(&self) -> bool {
        self.interval_secs > 0
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
