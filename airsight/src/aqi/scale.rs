//! AQI severity scale.
//!
//! Classification follows the conventional AQI breakpoints with inclusive
//! upper bounds: an index of exactly 50 is still Good, exactly 100 is still
//! Moderate, and so on. Anything above 200 is Very Unhealthy.

use std::fmt;

/// Upper bound of the Good band (inclusive).
pub const GOOD_MAX: f64 = 50.0;
/// Upper bound of the Moderate band (inclusive).
pub const MODERATE_MAX: f64 = 100.0;
/// Upper bound of the Unhealthy for Sensitive Groups band (inclusive).
pub const SENSITIVE_MAX: f64 = 150.0;
/// Upper bound of the Unhealthy band (inclusive).
pub const UNHEALTHY_MAX: f64 = 200.0;

/// Discrete severity level for an air quality index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityLevel {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeverityLevel::Good => "Good",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            SeverityLevel::Unhealthy => "Unhealthy",
            SeverityLevel::VeryUnhealthy => "Very Unhealthy",
        };
        write!(f, "{}", s)
    }
}

/// Display color token for a severity level.
///
/// Rendering surfaces resolve the token to a concrete value via [`hex`].
///
/// [`hex`]: AqiColor::hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AqiColor {
    Green,
    Amber,
    Orange,
    Red,
    Purple,
}

impl AqiColor {
    /// CSS hex value for this color token.
    #[inline]
    pub fn hex(&self) -> &'static str {
        match self {
            AqiColor::Green => "#10b981",
            AqiColor::Amber => "#f59e0b",
            AqiColor::Orange => "#f97316",
            AqiColor::Red => "#ef4444",
            AqiColor::Purple => "#8b5cf6",
        }
    }
}

impl fmt::Display for AqiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// Result of classifying an air quality index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AqiClass {
    pub level: SeverityLevel,
    pub color: AqiColor,
}

/// Classifies a numeric air quality index into a severity level and color.
///
/// Total over all inputs. Negative values fall into the Good band by the
/// same upper-bound rule; they never occur in accepted readings because the
/// fetch boundary rejects them.
pub fn classify(aqi: f64) -> AqiClass {
    let (level, color) = if aqi <= GOOD_MAX {
        (SeverityLevel::Good, AqiColor::Green)
    } else if aqi <= MODERATE_MAX {
        (SeverityLevel::Moderate, AqiColor::Amber)
    } else if aqi <= SENSITIVE_MAX {
        (SeverityLevel::UnhealthyForSensitiveGroups, AqiColor::Orange)
    } else if aqi <= UNHEALTHY_MAX {
        (SeverityLevel::Unhealthy, AqiColor::Red)
    } else {
        (SeverityLevel::VeryUnhealthy, AqiColor::Purple)
    };
    AqiClass { level, color }
}

/// Classifies an optional index, treating a missing value as zero.
///
/// Absent data therefore displays as Good rather than being hidden. Whether
/// a marker is drawn at all is a separate decision made from the presence of
/// the reading itself.
#[inline]
pub fn classify_opt(aqi: Option<f64>) -> AqiClass {
    classify(aqi.unwrap_or(0.0))
}
