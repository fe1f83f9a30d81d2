//! Display layers and source eligibility.
//!
//! A layer is a user-selected mode that controls which sources are
//! *eligible* for display, independent of whether data has arrived for
//! them. Whether an eligible source is actually drawn is decided later from
//! reading presence (see the marker module).

use std::fmt;
use std::str::FromStr;

use crate::source::SourceId;

/// User-selectable display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapLayer {
    /// Current-location index only.
    #[default]
    Aqi,
    /// Satellite observation only.
    Satellite,
    /// Ground-station observation only.
    Ground,
    /// All sources side by side.
    Comparison,
    /// Pollutant detail; marker eligibility matches [`MapLayer::Comparison`].
    Pollutants,
}

impl MapLayer {
    /// All layers in selector order.
    pub const ALL: [MapLayer; 5] = [
        MapLayer::Aqi,
        MapLayer::Satellite,
        MapLayer::Ground,
        MapLayer::Comparison,
        MapLayer::Pollutants,
    ];

    /// Label shown in the layer selector.
    pub fn label(&self) -> &'static str {
        match self {
            MapLayer::Aqi => "Air Quality Index",
            MapLayer::Satellite => "TEMPO Satellite",
            MapLayer::Ground => "OpenAQ Ground",
            MapLayer::Comparison => "Data Comparison",
            MapLayer::Pollutants => "Pollutants",
        }
    }

    /// The next layer in selector order, wrapping at the end.
    pub fn next(&self) -> MapLayer {
        match self {
            MapLayer::Aqi => MapLayer::Satellite,
            MapLayer::Satellite => MapLayer::Ground,
            MapLayer::Ground => MapLayer::Comparison,
            MapLayer::Comparison => MapLayer::Pollutants,
            MapLayer::Pollutants => MapLayer::Aqi,
        }
    }

    /// Canonical config/CLI value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapLayer::Aqi => "aqi",
            MapLayer::Satellite => "satellite",
            MapLayer::Ground => "ground",
            MapLayer::Comparison => "comparison",
            MapLayer::Pollutants => "pollutants",
        }
    }
}

impl fmt::Display for MapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MapLayer {
    type Err = ();

    /// Parses a layer from its config value (case-insensitive).
    ///
    /// Valid values: "aqi", "satellite", "ground", "comparison",
    /// "pollutants"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aqi" => Ok(MapLayer::Aqi),
            "satellite" => Ok(MapLayer::Satellite),
            "ground" => Ok(MapLayer::Ground),
            "comparison" => Ok(MapLayer::Comparison),
            "pollutants" => Ok(MapLayer::Pollutants),
            _ => Err(()),
        }
    }
}

/// Fixed-capacity set over the three sources.
///
/// Iteration order is the display order of [`SourceId::ALL`] regardless of
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceSet {
    members: [bool; 3],
}

impl SourceSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source to the set.
    pub fn insert(&mut self, source: SourceId) {
        self.members[source.index()] = true;
    }

    /// True if the source is a member.
    #[inline]
    pub fn contains(&self, source: SourceId) -> bool {
        self.members[source.index()]
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.iter().filter(|m| **m).count()
    }

    /// True when no source is a member.
    pub fn is_empty(&self) -> bool {
        !self.members.iter().any(|m| *m)
    }

    /// Iterates members in display order.
    pub fn iter(&self) -> impl Iterator<Item = SourceId> + '_ {
        SourceId::ALL
            .iter()
            .copied()
            .filter(move |source| self.contains(*source))
    }
}

impl<const N: usize> From<[SourceId; N]> for SourceSet {
    fn from(sources: [SourceId; N]) -> Self {
        let mut set = SourceSet::new();
        for source in sources {
            set.insert(source);
        }
        set
    }
}

/// Decides which sources the given layer makes eligible for display.
///
/// The current source is never gated by the auxiliary toggle; the satellite
/// and ground sources always are. Eligibility ignores data availability by
/// design.
pub fn eligible_sources(layer: MapLayer, show_auxiliary: bool) -> SourceSet {
    let mut set = SourceSet::new();
    match layer {
        MapLayer::Aqi => {
            set.insert(SourceId::Current);
        }
        MapLayer::Satellite => {
            if show_auxiliary {
                set.insert(SourceId::Satellite);
            }
        }
        MapLayer::Ground => {
            if show_auxiliary {
                set.insert(SourceId::Ground);
            }
        }
        MapLayer::Comparison | MapLayer::Pollutants => {
            set.insert(SourceId::Current);
            if show_auxiliary {
                set.insert(SourceId::Satellite);
                set.insert(SourceId::Ground);
            }
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aqi_layer_ignores_toggle() {
        let expected = SourceSet::from([SourceId::Current]);
        assert_eq!(eligible_sources(MapLayer::Aqi, true), expected);
        assert_eq!(eligible_sources(MapLayer::Aqi, false), expected);
    }

    #[test]
    fn test_satellite_layer_gated_by_toggle() {
        assert_eq!(
            eligible_sources(MapLayer::Satellite, true),
            SourceSet::from([SourceId::Satellite])
        );
        assert!(eligible_sources(MapLayer::Satellite, false).is_empty());
    }

    #[test]
    fn test_ground_layer_gated_by_toggle() {
        assert_eq!(
            eligible_sources(MapLayer::Ground, true),
            SourceSet::from([SourceId::Ground])
        );
        assert!(eligible_sources(MapLayer::Ground, false).is_empty());
    }

    #[test]
    fn test_comparison_layer() {
        assert_eq!(
            eligible_sources(MapLayer::Comparison, true),
            SourceSet::from([SourceId::Current, SourceId::Satellite, SourceId::Ground])
        );
        assert_eq!(
            eligible_sources(MapLayer::Comparison, false),
            SourceSet::from([SourceId::Current])
        );
    }

    #[test]
    fn test_pollutants_matches_comparison() {
        for toggle in [true, false] {
            assert_eq!(
                eligible_sources(MapLayer::Pollutants, toggle),
                eligible_sources(MapLayer::Comparison, toggle)
            );
        }
    }

    #[test]
    fn test_source_set_basics() {
        let mut set = SourceSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);

        set.insert(SourceId::Ground);
        set.insert(SourceId::Current);
        // Duplicate insert is a no-op
        set.insert(SourceId::Ground);

        assert_eq!(set.len(), 2);
        assert!(set.contains(SourceId::Current));
        assert!(set.contains(SourceId::Ground));
        assert!(!set.contains(SourceId::Satellite));
    }

    #[test]
    fn test_source_set_iterates_display_order() {
        let set = SourceSet::from([SourceId::Ground, SourceId::Current]);
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec![SourceId::Current, SourceId::Ground]);
    }

    #[test]
    fn test_layer_cycle_covers_all() {
        let mut layer = MapLayer::Aqi;
        let mut seen = Vec::new();
        for _ in 0..MapLayer::ALL.len() {
            seen.push(layer);
            layer = layer.next();
        }
        assert_eq!(layer, MapLayer::Aqi, "cycle should wrap to the start");
        assert_eq!(seen, MapLayer::ALL.to_vec());
    }

    #[test]
    fn test_layer_from_str() {
        assert_eq!("aqi".parse::<MapLayer>(), Ok(MapLayer::Aqi));
        assert_eq!("COMPARISON".parse::<MapLayer>(), Ok(MapLayer::Comparison));
        assert_eq!("Pollutants".parse::<MapLayer>(), Ok(MapLayer::Pollutants));
        assert!("smog".parse::<MapLayer>().is_err());
    }

    #[test]
    fn test_layer_round_trip() {
        for layer in MapLayer::ALL {
            assert_eq!(layer.as_str().parse::<MapLayer>(), Ok(layer));
        }
    }

    #[test]
    fn test_layer_labels() {
        assert_eq!(MapLayer::Aqi.label(), "Air Quality Index");
        assert_eq!(MapLayer::Comparison.label(), "Data Comparison");
    }
}
