//! Source identities and reading values.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};

/// One of the three fixed data origins.
///
/// The set is closed: the engine displays a current/local value plus two
/// auxiliary observations (satellite-derived and ground-station) for the
/// same reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceId {
    /// Local value for the reference location itself.
    Current,
    /// Satellite-derived observation (TEMPO).
    Satellite,
    /// Ground-station observation (OpenAQ).
    Ground,
}

impl SourceId {
    /// All sources in display order.
    pub const ALL: [SourceId; 3] = [SourceId::Current, SourceId::Satellite, SourceId::Ground];

    /// Human-readable name used in tooltips and the status surface.
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceId::Current => "Current Location",
            SourceId::Satellite => "TEMPO Satellite",
            SourceId::Ground => "OpenAQ Ground",
        }
    }

    /// True for the sources gated by the auxiliary visibility toggle.
    #[inline]
    pub fn is_auxiliary(&self) -> bool {
        matches!(self, SourceId::Satellite | SourceId::Ground)
    }

    /// Stable index into per-source arrays.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        match self {
            SourceId::Current => 0,
            SourceId::Satellite => 1,
            SourceId::Ground => 2,
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The latest known value for one source.
///
/// A reading is overwritten wholesale when a newer fetch result is accepted;
/// fields are never merged. `aqi: None` means the source responded without
/// an index value, which is distinct from having no reading at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Air quality index. When present, non-negative.
    pub aqi: Option<f64>,
    /// Pollutant concentrations keyed by pollutant name.
    pub pollutants: Option<HashMap<String, f64>>,
    /// When this reading was accepted locally. Informational; result
    /// ordering is governed by fetch sequence, not timestamps.
    pub received_at: DateTime<Utc>,
}

impl Reading {
    /// Creates a reading received now.
    pub fn new(aqi: Option<f64>) -> Self {
        Self {
            aqi,
            pollutants: None,
            received_at: Utc::now(),
        }
    }

    /// Attaches a pollutant breakdown.
    pub fn with_pollutants(mut self, pollutants: HashMap<String, f64>) -> Self {
        self.pollutants = Some(pollutants);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(SourceId::Current.display_name(), "Current Location");
        assert_eq!(SourceId::Satellite.display_name(), "TEMPO Satellite");
        assert_eq!(SourceId::Ground.display_name(), "OpenAQ Ground");
    }

    #[test]
    fn test_auxiliary_flag() {
        assert!(!SourceId::Current.is_auxiliary());
        assert!(SourceId::Satellite.is_auxiliary());
        assert!(SourceId::Ground.is_auxiliary());
    }

    #[test]
    fn test_all_sources_ordered() {
        assert_eq!(SourceId::ALL.len(), 3);
        assert_eq!(SourceId::ALL[0], SourceId::Current);
        // Indexes agree with ALL ordering
        for (i, source) in SourceId::ALL.iter().enumerate() {
            assert_eq!(source.index(), i);
        }
    }

    #[test]
    fn test_reading_construction() {
        let reading = Reading::new(Some(42.0));
        assert_eq!(reading.aqi, Some(42.0));
        assert!(reading.pollutants.is_none());

        let reading = Reading::new(None);
        assert!(reading.aqi.is_none());
    }

    #[test]
    fn test_reading_with_pollutants() {
        let mut pollutants = HashMap::new();
        pollutants.insert("no2".to_string(), 18.5);
        pollutants.insert("pm25".to_string(), 12.0);

        let reading = Reading::new(Some(55.0)).with_pollutants(pollutants.clone());
        assert_eq!(reading.pollutants, Some(pollutants));
    }
}
