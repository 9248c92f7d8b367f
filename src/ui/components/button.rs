//! Button component for TUI

use super::ACCENT;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a contained (filled) primary action button
pub fn render_action_button(frame: &mut Frame, area: Rect, label: &str, is_selected: bool) {
    let style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));

    let paragraph = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Render an inline hyperlink-style action at the right edge of `area`
pub fn render_link(frame: &mut Frame, area: Rect, label: &str, is_selected: bool) {
    let mut style = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED);
    if is_selected {
        style = style.fg(ACCENT).add_modifier(Modifier::BOLD);
    }
    frame.render_widget(
        Paragraph::new(label.to_string())
            .style(style)
            .alignment(Alignment::Right),
        area,
    );
}
