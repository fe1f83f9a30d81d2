//! Marker descriptions and desired-set construction.

use crate::aqi::{classify_opt, AqiColor};
use crate::coord::GeoPoint;
use crate::layer::{eligible_sources, MapLayer};
use crate::position::marker_position;
use crate::source::{Reading, SourceId, SourceRegistry};

/// Marker border color, shared by every marker.
pub const BORDER_COLOR: &str = "white";
/// Marker border width, shared by every marker.
pub const BORDER_WIDTH: f32 = 2.0;
/// Circle scale for the current-location marker.
pub const PRIMARY_SCALE: f32 = 15.0;
/// Circle scale for auxiliary markers.
pub const AUXILIARY_SCALE: f32 = 12.0;

/// Complete visual description of one drawn marker.
///
/// Ephemeral: the full set is recomputed from scratch on every trigger and
/// holds no identity across recomputations beyond the source. Two states
/// are equal when they would render identically.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerState {
    pub source: SourceId,
    pub position: GeoPoint,
    /// Fill color from classifying the source's index (missing value
    /// classifies as zero).
    pub fill: AqiColor,
    /// Short label drawn inside the circle: "T" satellite, "O" ground,
    /// the numeric index for current.
    pub glyph: String,
    /// Hover text: source name, index value, severity level.
    pub tooltip: String,
    /// Circle scale; primary draws larger than auxiliary.
    pub scale: f32,
}

/// Builds the marker for one source from its reading.
///
/// The value shown in the tooltip distinguishes the sources: the current
/// source substitutes `0` for a missing index (it always presents a
/// number), auxiliary sources show `N/A`. Color and severity always come
/// from the classify-missing-as-zero rule.
pub fn marker_for(source: SourceId, reading: &Reading, reference: GeoPoint) -> MarkerState {
    let class = classify_opt(reading.aqi);

    let glyph = match source {
        SourceId::Current => format_aqi(reading.aqi.unwrap_or(0.0)),
        SourceId::Satellite => "T".to_string(),
        SourceId::Ground => "O".to_string(),
    };

    let value_text = match (source, reading.aqi) {
        (_, Some(aqi)) => format_aqi(aqi),
        (SourceId::Current, None) => "0".to_string(),
        (_, None) => "N/A".to_string(),
    };

    let tooltip = format!(
        "{} - AQI: {} ({})",
        source.display_name(),
        value_text,
        class.level
    );

    MarkerState {
        source,
        position: marker_position(source, reference),
        fill: class.color,
        glyph,
        tooltip,
        scale: if source.is_auxiliary() {
            AUXILIARY_SCALE
        } else {
            PRIMARY_SCALE
        },
    }
}

/// Computes the full desired marker set for the current state.
///
/// Joins layer eligibility with reading presence: an eligible source with
/// no reading yet produces no marker, for the current source as much as for
/// the auxiliary ones. Output order follows source display order.
pub fn desired_markers(
    registry: &SourceRegistry,
    layer: MapLayer,
    show_auxiliary: bool,
) -> Vec<MarkerState> {
    let eligible = eligible_sources(layer, show_auxiliary);
    eligible
        .iter()
        .filter_map(|source| {
            registry
                .reading(source)
                .map(|reading| marker_for(source, reading, registry.reference()))
        })
        .collect()
}

/// Formats an index value the way the raw number reads: integral values
/// drop the fraction ("42"), others keep it ("42.5").
fn format_aqi(aqi: f64) -> String {
    format!("{}", aqi)
}
