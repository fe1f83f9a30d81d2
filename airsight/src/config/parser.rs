//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::coord::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::layer::MapLayer;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in
/// the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [map] section
    if let Some(section) = ini.section(Some("map")) {
        if let Some(v) = section.get("latitude") {
            let parsed: f64 = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "map".to_string(),
                key: "latitude".to_string(),
                value: v.to_string(),
                reason: "must be a number".to_string(),
            })?;
            if !(MIN_LAT..=MAX_LAT).contains(&parsed) {
                return Err(ConfigFileError::InvalidValue {
                    section: "map".to_string(),
                    key: "latitude".to_string(),
                    value: v.to_string(),
                    reason: format!("must be between {} and {}", MIN_LAT, MAX_LAT),
                });
            }
            config.map.latitude = parsed;
        }
        if let Some(v) = section.get("longitude") {
            let parsed: f64 = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "map".to_string(),
                key: "longitude".to_string(),
                value: v.to_string(),
                reason: "must be a number".to_string(),
            })?;
            if !(MIN_LON..=MAX_LON).contains(&parsed) {
                return Err(ConfigFileError::InvalidValue {
                    section: "map".to_string(),
                    key: "longitude".to_string(),
                    value: v.to_string(),
                    reason: format!("must be between {} and {}", MIN_LON, MAX_LON),
                });
            }
            config.map.longitude = parsed;
        }
        if let Some(v) = section.get("default_layer") {
            config.map.default_layer =
                v.parse::<MapLayer>()
                    .map_err(|_| ConfigFileError::InvalidValue {
                        section: "map".to_string(),
                        key: "default_layer".to_string(),
                        value: v.to_string(),
                        reason: "must be one of: aqi, satellite, ground, comparison, pollutants"
                            .to_string(),
                    })?;
        }
        if let Some(v) = section.get("show_stations") {
            config.map.show_stations = parse_bool(v);
        }
    }

    // [network] section
    if let Some(section) = ini.section(Some("network")) {
        if let Some(v) = section.get("base_url") {
            let v = v.trim();
            if !v.is_empty() {
                config.network.base_url = v.to_string();
            }
        }
        if let Some(v) = section.get("timeout_secs") {
            config.network.timeout_secs =
                v.parse().map_err(|_| ConfigFileError::InvalidValue {
                    section: "network".to_string(),
                    key: "timeout_secs".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer (seconds)".to_string(),
                })?;
        }
    }

    // [refresh] section
    if let Some(section) = ini.section(Some("refresh")) {
        if let Some(v) = section.get("interval_secs") {
            config.refresh.interval_secs =
                v.parse().map_err(|_| ConfigFileError::InvalidValue {
                    section: "refresh".to_string(),
                    key: "interval_secs".to_string(),
                    value: v.to_string(),
                    reason: "must be an integer (seconds, 0 disables)".to_string(),
                })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        ConfigFile::load_from(&config_path)
    }

    #[test]
    fn test_full_config() {
        let config = load(
            r#"
[map]
latitude = 34.0522
longitude = -118.2437
default_layer = comparison
show_stations = no

[network]
base_url = http://airdata.example.net:8080
timeout_secs = 5

[refresh]
interval_secs = 120

[logging]
file = /var/log/airsight.log
"#,
        )
        .unwrap();

        assert_eq!(config.map.latitude, 34.0522);
        assert_eq!(config.map.longitude, -118.2437);
        assert_eq!(config.map.default_layer, MapLayer::Comparison);
        assert!(!config.map.show_stations);
        assert_eq!(config.network.base_url, "http://airdata.example.net:8080");
        assert_eq!(config.network.timeout_secs, 5);
        assert_eq!(config.refresh.interval_secs, 120);
        assert_eq!(config.logging.file, PathBuf::from("/var/log/airsight.log"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = load(
            r#"
[refresh]
interval_secs = 300
"#,
        )
        .unwrap();

        assert_eq!(config.map.latitude, 40.7128);
        assert_eq!(config.map.default_layer, MapLayer::Aqi);
        assert!(config.map.show_stations);
        assert_eq!(config.refresh.interval_secs, 300);
    }

    #[test]
    fn test_invalid_layer() {
        let result = load(
            r#"
[map]
default_layer = heatmap
"#,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("default_layer"));
        assert!(err.to_string().contains("must be one of:"));
    }

    #[test]
    fn test_latitude_out_of_range() {
        let result = load(
            r#"
[map]
latitude = 95.5
"#,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("between"));
    }

    #[test]
    fn test_latitude_not_a_number() {
        let result = load(
            r#"
[map]
latitude = north
"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        let result = load(
            r#"
[network]
timeout_secs = soon
"#,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_layer_names_case_insensitive() {
        let config = load(
            r#"
[map]
default_layer = Pollutants
"#,
        )
        .unwrap();

        assert_eq!(config.map.default_layer, MapLayer::Pollutants);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("YES"));
        assert!(parse_bool("1"));
        assert!(parse_bool("on"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("maybe"));
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test/path");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("test/path"));
        }

        // Non-tilde paths should be unchanged
        let path = expand_tilde("/absolute/path");
        assert_eq!(path, PathBuf::from("/absolute/path"));
    }
}
