//! Platform-specific key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Platform-appropriate modifier for Enter-to-submit
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+Enter/Ctrl+Enter also work where the terminal reports them)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Whether `key` submits the focused form from any field
pub fn is_submit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('s') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Enter => key.modifiers.contains(SUBMIT_MODIFIER),
        _ => false,
    }
}
