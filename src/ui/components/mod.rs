//! Reusable UI components

mod button;

use ratatui::style::Color;

/// Primary accent ("tomato")
pub const ACCENT: Color = Color::Rgb(255, 99, 71);

pub use button::{render_action_button, render_link, BUTTON_HEIGHT};
