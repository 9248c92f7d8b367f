//! UI module for rendering the TUI

mod components;
mod dashboard;
mod forms;
mod layout;
mod login;
mod register;
mod splash;
mod welcome;
mod widgets;

use crate::app::App;
use crate::state::Screen;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let Some(splash_state) = &app.splash_state {
        splash::draw(frame, area, splash_state);
        return;
    }

    let route = app.state.current_route();
    let areas = layout::create_layout(area, route.header_shown());

    if let Some(header) = areas.header {
        layout::draw_header(frame, header, app);
    }

    // Draw the screen on top of the navigation stack
    match app.state.current_screen() {
        Some(Screen::Welcome) | None => welcome::draw(frame, areas.content),
        Some(Screen::Login(form)) => login::draw(frame, areas.content, form),
        Some(Screen::Register(screen)) => register::draw(frame, areas.content, screen),
        Some(Screen::Dashboard) => dashboard::draw(frame, areas.content),
    }

    layout::draw_status_bar(frame, areas.status, app);
}
