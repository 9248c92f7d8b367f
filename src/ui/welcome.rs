//! Welcome screen: entry point with the "Get Started" action

use super::components::{render_action_button, ACCENT, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(3),             // Heading
            Constraint::Length(1),             // Gap
            Constraint::Length(BUTTON_HEIGHT), // Get Started
            Constraint::Length(1),             // Version
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .horizontal_margin(2)
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Create an account or sign in to continue",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[1]);

    render_action_button(frame, chunks[3], "Get Started", true);

    let version = Paragraph::new(Span::styled(
        format!("Version: {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(version, chunks[4]);
}
