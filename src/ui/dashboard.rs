//! Dashboard placeholder shown after signing in

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::layout::centered_rect;

pub fn draw(frame: &mut Frame, area: Rect) {
    let home = Paragraph::new("Home")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(home, centered_rect(area.width, 1, area));
}
