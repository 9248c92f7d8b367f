//! Login screen rendering

use super::components::{render_action_button, render_link, BUTTON_HEIGHT};
use super::forms::{draw_field, field_height};
use crate::state::{Form, LoginForm};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, form: &LoginForm) {
    let username_error = form.error_for(form.username.name);
    let password_error = form.error_for(form.password.name);
    // Width inside the margin
    let width = area.width.saturating_sub(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                                   // Title
            Constraint::Length(field_height(username_error, width)), // Username
            Constraint::Length(field_height(password_error, width)), // Password
            Constraint::Length(1),                                   // Gap
            Constraint::Length(1),                                   // Sign Up link
            Constraint::Length(BUTTON_HEIGHT),                       // Sign In
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new("Login")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let active = form.active_field();
    draw_field(frame, chunks[1], &form.username, active == 0, username_error);
    draw_field(frame, chunks[2], &form.password, active == 1, password_error);

    // Button order: 0=Sign In, 1=Sign Up
    let on_buttons = form.is_buttons_row_active();
    render_link(
        frame,
        chunks[4],
        LoginForm::BUTTONS[1],
        on_buttons && form.selected_button == 1,
    );
    render_action_button(
        frame,
        chunks[5],
        LoginForm::BUTTONS[0],
        on_buttons && form.selected_button == 0,
    );
}
