//! Published view of engine state for renderers.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::aqi::{classify_opt, AqiClass};
use crate::layer::MapLayer;
use crate::marker::MarkerState;
use crate::source::{Reading, SourceId};

/// Shared state handle for read-only access by renderers.
pub type SharedSceneState = Arc<RwLock<SceneSnapshot>>;

/// Presentation summary of one source's latest reading.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceSummary {
    /// The raw index value, if the source reported one.
    pub aqi: Option<f64>,
    /// Severity classification (missing values classify as zero).
    pub class: AqiClass,
    /// Pollutant concentrations in name order, empty when not reported.
    pub pollutants: Vec<(String, f64)>,
    /// When the reading was received.
    pub received_at: DateTime<Utc>,
}

impl SourceSummary {
    /// Builds a summary from a stored reading.
    pub fn from_reading(reading: &Reading) -> Self {
        let mut pollutants: Vec<(String, f64)> = reading
            .pollutants
            .as_ref()
            .map(|map| map.iter().map(|(name, value)| (name.clone(), *value)).collect())
            .unwrap_or_default();
        pollutants.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            aqi: reading.aqi,
            class: classify_opt(reading.aqi),
            pollutants,
            received_at: reading.received_at,
        }
    }
}

/// A point-in-time snapshot of everything a renderer needs.
///
/// The daemon is the only writer; it republishes after every processed
/// event. Renderers read the shared handle or receive clones over the
/// update channel, never touching engine internals.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSnapshot {
    /// Markers currently drawn, in source display order. Empty until the
    /// map surface binds.
    pub markers: Vec<MarkerState>,
    /// Active layer selection.
    pub layer: MapLayer,
    /// Whether auxiliary sources are shown on eligible layers.
    pub show_auxiliary: bool,
    /// Whether the map surface has bound.
    pub map_ready: bool,
    /// Latest summary per source, indexed by source display order.
    pub summaries: [Option<SourceSummary>; 3],
    /// Fetches dispatched but not yet resolved.
    pub in_flight: usize,
    /// Most recent fetch failure, cleared when the next refresh starts.
    pub last_error: Option<String>,
}

impl SceneSnapshot {
    /// Returns the summary for one source, if a reading has arrived.
    pub fn summary(&self, source: SourceId) -> Option<&SourceSummary> {
        self.summaries[source.index()].as_ref()
    }

    /// True while any fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

impl Default for SceneSnapshot {
    fn default() -> Self {
        Self {
            markers: Vec::new(),
            layer: MapLayer::default(),
            // Auxiliary sources are visible unless explicitly hidden
            show_auxiliary: true,
            map_ready: false,
            summaries: [None, None, None],
            in_flight: 0,
            last_error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::{AqiColor, SeverityLevel};
    use std::collections::HashMap;

    #[test]
    fn test_summary_from_reading() {
        let summary = SourceSummary::from_reading(&Reading::new(Some(120.0)));

        assert_eq!(summary.aqi, Some(120.0));
        assert_eq!(
            summary.class.level,
            SeverityLevel::UnhealthyForSensitiveGroups
        );
        assert_eq!(summary.class.color, AqiColor::Orange);
        assert!(summary.pollutants.is_empty());
    }

    #[test]
    fn test_summary_missing_value_classifies_as_zero() {
        let summary = SourceSummary::from_reading(&Reading::new(None));

        assert_eq!(summary.aqi, None);
        assert_eq!(summary.class.level, SeverityLevel::Good);
    }

    #[test]
    fn test_summary_pollutants_sorted_by_name() {
        let mut map = HashMap::new();
        map.insert("pm25".to_string(), 12.5);
        map.insert("no2".to_string(), 18.0);
        map.insert("o3".to_string(), 41.0);
        let reading = Reading::new(Some(55.0)).with_pollutants(map);

        let summary = SourceSummary::from_reading(&reading);
        let names: Vec<&str> = summary.pollutants.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["no2", "o3", "pm25"]);
    }

    #[test]
    fn test_default_snapshot() {
        let snapshot = SceneSnapshot::default();

        assert!(snapshot.markers.is_empty());
        assert_eq!(snapshot.layer, MapLayer::Aqi);
        assert!(snapshot.show_auxiliary);
        assert!(!snapshot.map_ready);
        assert!(!snapshot.is_loading());
        assert!(snapshot.summary(SourceId::Current).is_none());
    }

    #[test]
    fn test_is_loading_tracks_in_flight() {
        let mut snapshot = SceneSnapshot::default();
        assert!(!snapshot.is_loading());

        snapshot.in_flight = 3;
        assert!(snapshot.is_loading());
    }
}
