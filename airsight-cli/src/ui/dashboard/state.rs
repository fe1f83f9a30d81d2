//! State types for the dashboard.
//!
//! This module contains the event and configuration types used by the
//! dashboard. They are independent of rendering and can be tested in
//! isolation.

use std::time::Duration;

use airsight::coord::GeoPoint;

/// Events that can occur in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// User requested quit (Ctrl+C or 'q').
    Quit,
    /// User requested a manual data refresh ('r').
    Refresh,
    /// User requested the next map layer ('l').
    CycleLayer,
    /// User toggled station marker visibility ('s').
    ToggleStations,
}

/// Dashboard configuration.
///
/// Static facts shown in the status bar; live state comes from the
/// engine snapshot on every draw.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Monitored location.
    pub reference: GeoPoint,
    /// Base URL of the data service.
    pub base_url: String,
    /// Periodic refresh interval in seconds; 0 means manual only.
    pub refresh_interval_secs: u64,
}

impl DashboardConfig {
    /// Human-readable refresh description for the status bar.
    pub fn refresh_text(&self) -> String {
        if self.refresh_interval_secs == 0 {
            "manual".to_string()
        } else {
            format!("every {}s", self.refresh_interval_secs)
        }
    }
}

/// Timeout for quit confirmation (auto-cancels after this duration).
pub const QUIT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(5);

/// Spinner animation frames shown while fetches are in flight.
pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[cfg(test)]
mod tests {
    use super::*;

    fn config(interval: u64) -> DashboardConfig {
        DashboardConfig {
            reference: GeoPoint::new(40.7128, -74.0060).unwrap(),
            base_url: "http://localhost:5000".to_string(),
            refresh_interval_secs: interval,
        }
    }

    #[test]
    fn test_refresh_text_manual() {
        assert_eq!(config(0).refresh_text(), "manual");
    }

    #[test]
    fn test_refresh_text_periodic() {
        assert_eq!(config(60).refresh_text(), "every 60s");
    }
}
