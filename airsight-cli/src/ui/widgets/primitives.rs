//! Shared low-level helpers for dashboard widgets.

use airsight::aqi::AqiColor;
use ratatui::style::Color;

/// Terminal color for a severity color token.
///
/// RGB values match the hex palette markers use, so the dashboard and any
/// web surface present the same severity colors.
pub fn severity_color(color: AqiColor) -> Color {
    match color {
        AqiColor::Green => Color::Rgb(0x10, 0xb9, 0x81),
        AqiColor::Amber => Color::Rgb(0xf5, 0x9e, 0x0b),
        AqiColor::Orange => Color::Rgb(0xf9, 0x73, 0x16),
        AqiColor::Red => Color::Rgb(0xef, 0x44, 0x44),
        AqiColor::Purple => Color::Rgb(0x8b, 0x5c, 0xf6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_color_matches_hex_palette() {
        assert_eq!(severity_color(AqiColor::Green), Color::Rgb(16, 185, 129));
        assert_eq!(severity_color(AqiColor::Amber), Color::Rgb(245, 158, 11));
        assert_eq!(severity_color(AqiColor::Orange), Color::Rgb(249, 115, 22));
        assert_eq!(severity_color(AqiColor::Red), Color::Rgb(239, 68, 68));
        assert_eq!(severity_color(AqiColor::Purple), Color::Rgb(139, 92, 246));
    }
}
