//! Per-source reading summary widget.
//!
//! Shows one row per data source with the latest accepted reading: index
//! value, severity level, and arrival time. Sources without a reading yet
//! show a dash. On the pollutants layer each row grows a detail line with
//! the reported concentrations.

use airsight::engine::{SceneSnapshot, SourceSummary};
use airsight::layer::MapLayer;
use airsight::source::SourceId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::primitives::severity_color;

/// Widget displaying the latest reading per source.
pub struct SourceSummaryWidget<'a> {
    snapshot: &'a SceneSnapshot,
}

impl<'a> SourceSummaryWidget<'a> {
    /// Create a new source summary widget.
    pub fn new(snapshot: &'a SceneSnapshot) -> Self {
        Self { snapshot }
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let show_pollutants = self.snapshot.layer == MapLayer::Pollutants;
        let mut lines = Vec::new();

        for source in SourceId::ALL {
            let summary = self.snapshot.summary(source);
            lines.push(build_source_line(source, summary));

            if show_pollutants {
                if let Some(summary) = summary {
                    if !summary.pollutants.is_empty() {
                        lines.push(build_pollutant_line(summary));
                    }
                }
            }
        }

        lines
    }
}

impl Widget for SourceSummaryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(self.build_lines());
        paragraph.render(area, buf);
    }
}

/// Build the summary line for one source.
fn build_source_line(source: SourceId, summary: Option<&SourceSummary>) -> Line<'static> {
    let name_span = Span::styled(
        format!(" {:<18}", source.display_name()),
        Style::default().fg(Color::DarkGray),
    );

    let Some(summary) = summary else {
        return Line::from(vec![
            name_span,
            Span::styled("--", Style::default().fg(Color::DarkGray)),
        ]);
    };

    let color = severity_color(summary.class.color);
    let value_text = match summary.aqi {
        Some(aqi) => format!("{}", aqi),
        None => "N/A".to_string(),
    };

    Line::from(vec![
        name_span,
        Span::styled("AQI ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:>5}  ", value_text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{:<31}", summary.class.level.to_string()), Style::default().fg(color)),
        Span::styled(
            summary.received_at.format("%H:%M:%S").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Build the pollutant detail line shown on the pollutants layer.
fn build_pollutant_line(summary: &SourceSummary) -> Line<'static> {
    Line::from(vec![
        Span::styled("   └ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_pollutants(&summary.pollutants),
            Style::default().fg(Color::Cyan),
        ),
    ])
}

/// Format pollutant concentrations as "name value" pairs.
fn format_pollutants(pollutants: &[(String, f64)]) -> String {
    pollutants
        .iter()
        .map(|(name, value)| format!("{} {}", name, value))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use airsight::source::Reading;
    use std::collections::HashMap;

    fn summary(aqi: Option<f64>) -> SourceSummary {
        SourceSummary::from_reading(&Reading::new(aqi))
    }

    fn summary_with_pollutants() -> SourceSummary {
        let mut map = HashMap::new();
        map.insert("pm25".to_string(), 12.5);
        map.insert("no2".to_string(), 18.0);
        map.insert("o3".to_string(), 41.0);
        SourceSummary::from_reading(&Reading::new(Some(55.0)).with_pollutants(map))
    }

    #[test]
    fn test_source_line_shows_value_and_level() {
        let summary = summary(Some(42.0));
        let line = build_source_line(SourceId::Current, Some(&summary));

        assert!(line.spans[0].content.contains("Current Location"));
        assert_eq!(line.spans[2].content.trim(), "42");
        assert_eq!(line.spans[3].content.trim(), "Good");
        // Arrival time renders as HH:MM:SS
        assert_eq!(line.spans[4].content.len(), 8);
    }

    #[test]
    fn test_source_line_value_carries_severity_color() {
        let summary = summary(Some(160.0));
        let line = build_source_line(SourceId::Satellite, Some(&summary));

        assert_eq!(line.spans[2].style.fg, Some(Color::Rgb(239, 68, 68)));
        assert_eq!(line.spans[3].content.trim(), "Unhealthy");
    }

    #[test]
    fn test_missing_reading_shows_dash() {
        let line = build_source_line(SourceId::Ground, None);

        assert_eq!(line.spans.len(), 2);
        assert!(line.spans[0].content.contains("OpenAQ Ground"));
        assert_eq!(line.spans[1].content.as_ref(), "--");
    }

    #[test]
    fn test_missing_value_shows_na() {
        let summary = summary(None);
        let line = build_source_line(SourceId::Satellite, Some(&summary));

        assert_eq!(line.spans[2].content.trim(), "N/A");
        // Missing values classify as zero, so the level still reads Good
        assert_eq!(line.spans[3].content.trim(), "Good");
    }

    #[test]
    fn test_pollutants_formatted_in_name_order() {
        let summary = summary_with_pollutants();
        assert_eq!(
            format_pollutants(&summary.pollutants),
            "no2 18  o3 41  pm25 12.5"
        );
    }

    #[test]
    fn test_pollutant_lines_only_on_pollutants_layer() {
        let mut snapshot = SceneSnapshot::default();
        // Summaries are indexed in source display order; Current is first
        snapshot.summaries[0] = Some(summary_with_pollutants());

        let lines = SourceSummaryWidget::new(&snapshot).build_lines();
        assert_eq!(lines.len(), 3);

        snapshot.layer = MapLayer::Pollutants;
        let lines = SourceSummaryWidget::new(&snapshot).build_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].spans[1].content.contains("pm25"));
    }
}
