//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::Route;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest the screen content gets, in columns
const CONTENT_MAX_WIDTH: u16 = 64;

/// Areas of the main layout
pub struct Areas {
    pub header: Option<Rect>,
    pub content: Rect,
    pub status: Rect,
}

/// Split the frame into an optional header, content and the status bar
pub fn create_layout(area: Rect, header_shown: bool) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if header_shown { 2 } else { 0 }), // Header
            Constraint::Min(0),                                   // Content
            Constraint::Length(1),                                // Status bar
        ])
        .split(area);

    Areas {
        header: header_shown.then_some(chunks[0]),
        content: centered_column(chunks[1], CONTENT_MAX_WIDTH),
        status: chunks[2],
    }
}

/// Horizontally center a column at most `max_width` wide
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Center a `width` x `height` rect inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the navigation header: back affordance and route title
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let route = app.state.current_route();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(Span::styled(
        route.title(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, inner);

    if app.state.can_go_back() {
        let back = Paragraph::new(Span::styled(" ‹ Back", Style::default().fg(Color::Cyan)));
        frame.render_widget(back, inner);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = Span::styled(
        format!(" {}", get_route_hints(app.state.current_route())),
        Style::default().fg(Color::Gray),
    );

    let status = Paragraph::new(Line::from(hints)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current route
fn get_route_hints(route: Route) -> String {
    match route {
        Route::Welcome => "Enter:get started  q:quit".to_string(),
        Route::Login => format!("Tab:next  Enter:select  {SUBMIT_SHORTCUT}:sign in  Esc:back"),
        Route::Register => {
            format!("Tab:next  ←/→:choose  Space:toggle  {SUBMIT_SHORTCUT}:sign up  Esc:back")
        }
        Route::Dashboard => "Esc:back  q:quit".to_string(),
    }
}
