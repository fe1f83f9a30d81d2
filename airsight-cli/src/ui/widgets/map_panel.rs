//! Map marker panel widget.
//!
//! Lists the markers currently drawn on the map surface, one row per
//! marker: a colored dot, the glyph drawn inside the circle, the marker
//! position, and the tooltip text.

use airsight::engine::SceneSnapshot;
use airsight::marker::MarkerState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::primitives::severity_color;

/// Widget displaying the drawn marker set.
pub struct MapPanelWidget<'a> {
    snapshot: &'a SceneSnapshot,
}

impl<'a> MapPanelWidget<'a> {
    /// Create a new map panel widget.
    pub fn new(snapshot: &'a SceneSnapshot) -> Self {
        Self { snapshot }
    }

    /// Build one display line per marker, or a placeholder when there is
    /// nothing to draw.
    fn build_lines(&self) -> Vec<Line<'static>> {
        if !self.snapshot.map_ready {
            return vec![placeholder_line("Binding map surface...", Color::Yellow)];
        }

        if self.snapshot.markers.is_empty() {
            let (text, color) = if self.snapshot.is_loading() {
                ("Fetching readings...", Color::Yellow)
            } else {
                ("No data for this layer yet", Color::DarkGray)
            };
            return vec![placeholder_line(text, color)];
        }

        self.snapshot.markers.iter().map(build_marker_line).collect()
    }
}

impl Widget for MapPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(self.build_lines());
        paragraph.render(area, buf);
    }
}

/// Build the display line for one marker.
fn build_marker_line(marker: &MarkerState) -> Line<'static> {
    let color = severity_color(marker.fill);
    Line::from(vec![
        Span::styled("   ● ", Style::default().fg(color)),
        Span::styled(
            format!("{:<6}", marker.glyph),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>18}   ", marker.position.to_string()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(marker.tooltip.clone(), Style::default().fg(color)),
    ])
}

fn placeholder_line(text: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("   {}", text),
        Style::default().fg(color),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use airsight::coord::GeoPoint;
    use airsight::marker::marker_for;
    use airsight::source::{Reading, SourceId};

    fn reference() -> GeoPoint {
        GeoPoint::new(40.7128, -74.0060).unwrap()
    }

    fn snapshot_with_markers(markers: Vec<MarkerState>) -> SceneSnapshot {
        SceneSnapshot {
            markers,
            map_ready: true,
            ..SceneSnapshot::default()
        }
    }

    #[test]
    fn test_marker_line_shows_glyph_position_and_tooltip() {
        let marker = marker_for(SourceId::Current, &Reading::new(Some(42.0)), reference());
        let line = build_marker_line(&marker);

        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[1].content.trim(), "42");
        assert!(line.spans[2].content.contains("40.7128, -74.0060"));
        assert_eq!(
            line.spans[3].content.as_ref(),
            "Current Location - AQI: 42 (Good)"
        );
    }

    #[test]
    fn test_marker_line_colors_follow_severity() {
        let marker = marker_for(SourceId::Satellite, &Reading::new(Some(160.0)), reference());
        let line = build_marker_line(&marker);

        // Dot and tooltip carry the red severity color
        let red = Some(Color::Rgb(239, 68, 68));
        assert_eq!(line.spans[0].style.fg, red);
        assert_eq!(line.spans[3].style.fg, red);
    }

    #[test]
    fn test_unbound_surface_shows_placeholder() {
        let snapshot = SceneSnapshot::default();
        let lines = MapPanelWidget::new(&snapshot).build_lines();

        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans[0].content.contains("Binding map surface"));
    }

    #[test]
    fn test_empty_layer_distinguishes_loading() {
        let mut snapshot = snapshot_with_markers(Vec::new());
        snapshot.in_flight = 3;
        let lines = MapPanelWidget::new(&snapshot).build_lines();
        assert!(lines[0].spans[0].content.contains("Fetching readings"));

        snapshot.in_flight = 0;
        let lines = MapPanelWidget::new(&snapshot).build_lines();
        assert!(lines[0].spans[0].content.contains("No data for this layer"));
    }

    #[test]
    fn test_one_line_per_marker() {
        let markers = vec![
            marker_for(SourceId::Current, &Reading::new(Some(75.0)), reference()),
            marker_for(SourceId::Satellite, &Reading::new(Some(160.0)), reference()),
            marker_for(SourceId::Ground, &Reading::new(Some(30.0)), reference()),
        ];
        let snapshot = snapshot_with_markers(markers);

        let lines = MapPanelWidget::new(&snapshot).build_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].spans[1].content.trim(), "T");
        assert_eq!(lines[2].spans[1].content.trim(), "O");
    }
}
