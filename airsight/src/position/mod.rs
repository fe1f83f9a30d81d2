//! Deterministic marker placement.
//!
//! All three sources describe the same geographic point, so drawing them at
//! their true coordinates would stack the markers exactly on top of each
//! other. Auxiliary markers are shifted by a fixed offset instead: visual
//! separation is guaranteed, geographic fidelity for those two markers is
//! deliberately given up. A multi-location extension would replace this
//! scheme with true per-source coordinates.

use crate::coord::GeoPoint;
use crate::source::SourceId;

/// Offset applied to auxiliary markers, in degrees.
pub const MARKER_OFFSET_DEG: f64 = 0.02;

/// Resolves the display position for a source's marker.
///
/// The current source draws at the reference point unmodified; the
/// satellite marker is shifted by `(+0.02, +0.02)` and the ground marker
/// by `(-0.02, -0.02)` degrees. Stateless: the same inputs always produce
/// the same position, and no two sources ever resolve to the same
/// coordinate.
pub fn marker_position(source: SourceId, reference: GeoPoint) -> GeoPoint {
    match source {
        SourceId::Current => reference,
        SourceId::Satellite => reference.offset_by(MARKER_OFFSET_DEG, MARKER_OFFSET_DEG),
        SourceId::Ground => reference.offset_by(-MARKER_OFFSET_DEG, -MARKER_OFFSET_DEG),
    }
}
