//! Main dashboard rendering.
//!
//! Top-level layout orchestration and the header, status bar, and quit
//! confirmation overlay.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Header (3 lines)                                        │
//! ├─────────────────────────────────────────────────────────┤
//! │ Map Markers (6 lines)                                   │
//! ├─────────────────────────────────────────────────────────┤
//! │ Sources (8 lines)                                       │
//! ├─────────────────────────────────────────────────────────┤
//! │ Status (3 lines)                                        │
//! └─────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use airsight::engine::SceneSnapshot;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::state::DashboardConfig;
use super::utils::format_duration;
use crate::ui::widgets::{MapPanelWidget, SourceSummaryWidget};

/// Render the main dashboard UI to the frame.
pub fn render_ui(
    frame: &mut Frame,
    snapshot: &SceneSnapshot,
    config: &DashboardConfig,
    uptime: Duration,
    spinner: Option<char>,
    confirmation_remaining: Option<Duration>,
) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Map Markers
            Constraint::Length(8), // Sources
            Constraint::Length(3), // Status
            Constraint::Min(0),    // Padding
        ])
        .split(size);

    render_header(frame, chunks[0], snapshot, uptime, spinner);

    let marker_block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Map Markers ",
            Style::default().fg(Color::Green),
        ));
    frame.render_widget(marker_block, chunks[1]);
    frame.render_widget(MapPanelWidget::new(snapshot), inner_rect(chunks[1], 1, 1));

    let sources_block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(" Sources ", Style::default().fg(Color::Blue)));
    frame.render_widget(sources_block, chunks[2]);
    frame.render_widget(
        SourceSummaryWidget::new(snapshot),
        inner_rect(chunks[2], 1, 1),
    );

    render_status_bar(frame, chunks[3], snapshot, config);

    // Quit confirmation overlay (if active)
    if let Some(remaining) = confirmation_remaining {
        render_quit_confirmation(frame, size, remaining);
    }
}

/// Render the header bar with the active layer, toggle state, and uptime.
fn render_header(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SceneSnapshot,
    uptime: Duration,
    spinner: Option<char>,
) {
    let header_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" AirSight {} ", airsight::VERSION),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(ratatui::layout::Alignment::Left);

    let mut spans = Vec::new();
    if let Some(spinner) = spinner {
        spans.push(Span::styled(
            format!("{} Fetching", spinner),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }
    spans.extend([
        Span::styled("Layer: ", Style::default().fg(Color::DarkGray)),
        Span::styled(snapshot.layer.label(), Style::default().fg(Color::Cyan)),
        Span::styled("  │  Stations: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            if snapshot.show_auxiliary { "on" } else { "off" },
            Style::default().fg(Color::White),
        ),
        Span::styled("  │  Uptime: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format_duration(uptime), Style::default().fg(Color::White)),
        Span::styled("  │  Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(" to quit", Style::default().fg(Color::DarkGray)),
    ]);

    let header = Paragraph::new(Line::from(spans))
        .block(header_block)
        .alignment(ratatui::layout::Alignment::Right);

    frame.render_widget(header, area);
}

/// Render the status bar: fetch errors when present, otherwise the static
/// session facts and key bindings.
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SceneSnapshot,
    config: &DashboardConfig,
) {
    let (border_color, title_color) = if snapshot.last_error.is_some() {
        (Color::Red, Color::Red)
    } else {
        (Color::DarkGray, Color::Blue)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " Status ",
            Style::default().fg(title_color),
        ));

    let content = if let Some(ref error) = snapshot.last_error {
        Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(Color::Red)),
            Span::styled(error.clone(), Style::default().fg(Color::Red)),
            Span::styled(
                "  (press r to retry)",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("Location: ", Style::default().fg(Color::DarkGray)),
            Span::styled(config.reference.to_string(), Style::default().fg(Color::White)),
            Span::styled("  │  Service: ", Style::default().fg(Color::DarkGray)),
            Span::styled(config.base_url.clone(), Style::default().fg(Color::White)),
            Span::styled("  │  Refresh: ", Style::default().fg(Color::DarkGray)),
            Span::styled(config.refresh_text(), Style::default().fg(Color::White)),
            Span::styled("  │  Keys: ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::styled(" refresh  ", Style::default().fg(Color::DarkGray)),
            Span::styled("l", Style::default().fg(Color::Yellow)),
            Span::styled(" layer  ", Style::default().fg(Color::DarkGray)),
            Span::styled("s", Style::default().fg(Color::Yellow)),
            Span::styled(" stations", Style::default().fg(Color::DarkGray)),
        ])
    };

    let paragraph = Paragraph::new(content).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the quit confirmation overlay banner.
fn render_quit_confirmation(frame: &mut Frame, area: Rect, remaining: Duration) {
    // Centered banner, below the header
    let banner_width = 56u16;
    let banner_height = 4u16;
    let x = area.x + (area.width.saturating_sub(banner_width)) / 2;
    let y = area.y + 4;

    let banner_area = Rect {
        x,
        y,
        width: banner_width.min(area.width),
        height: banner_height,
    };

    // Clear the background
    let clear_block = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(clear_block, banner_area);

    let remaining_secs = remaining.as_secs();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black))
        .title(Span::styled(
            " Confirm Quit ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));

    let text = vec![
        Line::from(vec![Span::styled(
            "Stop monitoring and close the dashboard?",
            Style::default().fg(Color::Yellow),
        )]),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::White)),
            Span::styled(
                "y",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" or ", Style::default().fg(Color::White)),
            Span::styled(
                "q",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit, ", Style::default().fg(Color::White)),
            Span::styled(
                "n",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" or ", Style::default().fg(Color::White)),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to cancel", Style::default().fg(Color::White)),
            Span::styled(
                format!("  ({}s)", remaining_secs),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(paragraph, banner_area);
}

/// Rect inset by the given margins on each side.
fn inner_rect(area: Rect, margin_x: u16, margin_y: u16) -> Rect {
    Rect {
        x: area.x + margin_x,
        y: area.y + margin_y,
        width: area.width.saturating_sub(margin_x * 2),
        height: area.height.saturating_sub(margin_y * 2),
    }
}
