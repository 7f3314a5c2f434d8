//! TUI theme.
//!
//! Muted palette: cyan-blue for the user, soft green for the mentor, amber
//! for transient states.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent - soft cyan blue
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Warm amber for highlights and loading
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Connected indicator - soft green
pub const SUCCESS: Color = Color::Rgb(130, 200, 130);

/// Disconnected indicator - soft red
pub const ERROR: Color = Color::Rgb(220, 100, 100);

/// Secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Code background tint
pub const CODE_BG: Color = Color::Rgb(40, 44, 52);

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn user_prefix() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn mentor_prefix() -> Style {
    Style::default().fg(SUCCESS)
}

pub fn inline_code() -> Style {
    Style::default().fg(HIGHLIGHT).bg(CODE_BG)
}

pub fn code_block() -> Style {
    Style::default().fg(Color::Rgb(200, 205, 215)).bg(CODE_BG)
}

pub fn code_caption() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

pub fn list_marker() -> Style {
    Style::default().fg(ACCENT)
}

pub fn status_connected() -> Style {
    Style::default().fg(SUCCESS)
}

pub fn status_disconnected() -> Style {
    Style::default().fg(ERROR)
}

pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

pub fn key_hint() -> Style {
    Style::default().fg(SUCCESS)
}

pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}
