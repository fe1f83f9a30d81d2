//! Geographic coordinate types

use std::fmt;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic point in decimal degrees.
///
/// The engine displays a single reference point per session; all marker
/// positions are derived from it. Constructed values are range-checked,
/// derived display offsets are not (see [`GeoPoint::offset_by`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, positive north
    pub lat: f64,
    /// Longitude in decimal degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a validated geographic point.
    ///
    /// # Errors
    ///
    /// Returns an error if either component is outside its valid range
    /// or is not a finite number.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Returns this point shifted by the given deltas in degrees.
    ///
    /// Display placement only: the result is not re-validated, so a point
    /// near a range boundary can shift slightly past it. Marker offsets are
    /// small (hundredths of a degree) and purely visual.
    #[inline]
    pub fn offset_by(&self, dlat: f64, dlon: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + dlat,
            lon: self.lon + dlon,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Errors from coordinate validation.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude is outside valid range (-90.0 to 90.0)
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180.0 to 180.0)
    InvalidLongitude(f64),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            CoordError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_point() {
        let p = GeoPoint::new(40.7128, -74.0060).unwrap();
        assert_eq!(p.lat, 40.7128);
        assert_eq!(p.lon, -74.0060);
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(GeoPoint::new(MAX_LAT, MAX_LON).is_ok());
        assert!(GeoPoint::new(MIN_LAT, MIN_LON).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_latitude_out_of_range() {
        let err = GeoPoint::new(90.01, 0.0).unwrap_err();
        assert_eq!(err, CoordError::InvalidLatitude(90.01));
        assert!(GeoPoint::new(-100.0, 0.0).is_err());
    }

    #[test]
    fn test_longitude_out_of_range() {
        let err = GeoPoint::new(0.0, 180.5).unwrap_err();
        assert_eq!(err, CoordError::InvalidLongitude(180.5));
        assert!(GeoPoint::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_offset_by() {
        let p = GeoPoint::new(40.0, -74.0).unwrap();
        let shifted = p.offset_by(0.02, 0.02);
        assert!((shifted.lat - 40.02).abs() < 1e-9);
        assert!((shifted.lon - -73.98).abs() < 1e-9);

        // Negative deltas
        let shifted = p.offset_by(-0.02, -0.02);
        assert!((shifted.lat - 39.98).abs() < 1e-9);
        assert!((shifted.lon - -74.02).abs() < 1e-9);
    }

    #[test]
    fn test_display_format() {
        let p = GeoPoint::new(40.7128, -74.0060).unwrap();
        assert_eq!(format!("{}", p), "40.7128, -74.0060");
    }

    #[test]
    fn test_error_messages() {
        let err = CoordError::InvalidLatitude(95.0);
        assert!(err.to_string().contains("Invalid latitude: 95"));
        let err = CoordError::InvalidLongitude(200.0);
        assert!(err.to_string().contains("Invalid longitude: 200"));
    }
}
