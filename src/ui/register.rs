//! Registration screen rendering

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::forms::{draw_field, field_height};
use super::layout::centered_rect;
use super::widgets::render_picker;
use crate::state::{Form, RegisterScreen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{ListItem, Paragraph},
    Frame,
};

/// Width of the country picker popup
const PICKER_WIDTH: u16 = 44;

pub fn draw(frame: &mut Frame, area: Rect, screen: &RegisterScreen) {
    let form = &screen.form;
    let inner = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };

    let title_area = Rect {
        height: inner.height.min(2),
        ..inner
    };
    let title = Paragraph::new("Sign Up")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let body = Rect {
        y: inner.y + title_area.height,
        height: inner.height - title_area.height,
        ..inner
    };

    // Row heights in display order: every field, then the buttons row
    let rows = form.field_count();
    let heights: Vec<u16> = (0..rows)
        .map(|index| match form.get_field(index) {
            Some(field) => field_height(form.error_for(field.name), body.width),
            None => BUTTON_HEIGHT,
        })
        .collect();

    let active = form.active_field();
    let first = first_visible_row(&heights, active, body.height);

    let bottom = body.y + body.height;
    let mut y = body.y;
    for (index, height) in heights.iter().enumerate().skip(first) {
        if y >= bottom {
            break;
        }
        // The last visible row may be clipped
        let row = Rect {
            y,
            height: (*height).min(bottom - y),
            ..body
        };
        match form.get_field(index) {
            Some(field) => {
                draw_field(frame, row, field, index == active, form.error_for(field.name));
                if field.name == form.country.name && screen.lookup.loading {
                    draw_loading_marker(frame, row);
                }
            }
            None => render_action_button(frame, row, "Sign Up", form.is_buttons_row_active()),
        }
        y += height;
    }

    if let Some(selected) = screen.picker {
        draw_country_picker(frame, area, screen, selected);
    }
}

/// First row to draw so the active row fits in `available` rows
fn first_visible_row(heights: &[u16], active: usize, available: u16) -> usize {
    let active = active.min(heights.len().saturating_sub(1));
    let mut first = 0;
    while first < active && heights[first..=active].iter().sum::<u16>() > available {
        first += 1;
    }
    first
}

/// Right-aligned marker on the field's top border while countries load
fn draw_loading_marker(frame: &mut Frame, row: Rect) {
    let marker_area = Rect {
        x: row.x + 1,
        width: row.width.saturating_sub(2),
        height: 1,
        ..row
    };
    let marker = Paragraph::new(" loading… ")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Right);
    frame.render_widget(marker, marker_area);
}

fn draw_country_picker(frame: &mut Frame, area: Rect, screen: &RegisterScreen, selected: usize) {
    let items: Vec<ListItem> = std::iter::once(ListItem::new("Select Country").style(
        Style::default().fg(Color::DarkGray),
    ))
    .chain(
        screen
            .lookup
            .options
            .iter()
            .map(|option| ListItem::new(option.label.as_str())),
    )
    .collect();

    let height = (screen.picker_len() as u16).saturating_add(2);
    let popup = centered_rect(PICKER_WIDTH, height, area);
    render_picker(frame, popup, "Country", items, selected);
}
