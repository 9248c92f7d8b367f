//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by the bordered input of a field
const INPUT_HEIGHT: u16 = 3;

/// Rows a field needs at `width`: the input plus its wrapped error message
pub fn field_height(error: Option<&str>, width: u16) -> u16 {
    let error_rows = match error {
        Some(message) => {
            let width = usize::from(width.max(1));
            // Leading space before the message
            let len = message.chars().count() + 1;
            len.div_ceil(width) as u16
        }
        None => 0,
    };
    INPUT_HEIGHT + error_rows
}

/// Draw a form field with its error message (if any) underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let input_area = Rect {
        height: area.height.min(INPUT_HEIGHT),
        ..area
    };

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if field.kind == FieldKind::Dropdown && field.as_text().is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(field.display_value(), value_style)];
    if is_active && field.accepts_text() {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    // Checkbox carries its own label inline
    let block = match field.kind {
        FieldKind::Checkbox => Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
        _ => Block::default()
            .title(format!(" {} ", field.label))
            .borders(Borders::ALL)
            .border_style(border_style),
    };

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

    if let Some(message) = error {
        if area.height > input_area.height {
            let error_area = Rect {
                y: input_area.y + input_area.height,
                height: area.height - input_area.height,
                ..area
            };
            draw_error_text(frame, error_area, message);
        }
    }
}

/// Draw a red validation message, wrapped to the area
fn draw_error_text(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: false }), area);
}
