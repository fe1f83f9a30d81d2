//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::layer::MapLayer;

// =============================================================================
// Map defaults
// =============================================================================

/// Default reference latitude (New York City).
pub const DEFAULT_LATITUDE: f64 = 40.7128;

/// Default reference longitude (New York City).
pub const DEFAULT_LONGITUDE: f64 = -74.0060;

/// Monitoring station markers start visible.
pub const DEFAULT_SHOW_STATIONS: bool = true;

// =============================================================================
// Network defaults
// =============================================================================

/// Default HTTP timeout in seconds for reading fetches.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Refresh defaults
// =============================================================================

/// Periodic refresh is off by default; 0 means manual refresh only.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 0;

// =============================================================================
// Logging defaults
// =============================================================================

/// Default log file path (~/.airsight/airsight.log).
pub fn default_log_file() -> PathBuf {
    config_directory().join("airsight.log")
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            map: MapSettings::default(),
            network: NetworkSettings::default(),
            refresh: RefreshSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            default_layer: MapLayer::default(),
            show_stations: DEFAULT_SHOW_STATIONS,
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            base_url: crate::fetch::DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_center_on_new_york() {
        let config = ConfigFile::default();

        assert_eq!(config.map.latitude, 40.7128);
        assert_eq!(config.map.longitude, -74.0060);
        assert_eq!(config.map.default_layer, MapLayer::Aqi);
        assert!(config.map.show_stations);
    }

    #[test]
    fn test_default_network_settings() {
        let config = ConfigFile::default();

        assert_eq!(config.network.base_url, "http://localhost:5000");
        assert_eq!(config.network.timeout_secs, 10);
        assert!(!config.refresh.enabled());
    }
}
