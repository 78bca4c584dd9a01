//! Theme and Colors
//!
//! Palette for the todo panel. Finished work recedes into muted grays, the
//! todo being worked on is picked out in blue, and progress is green.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Panel Chrome
// ============================================================================

/// Panel border
pub const BORDER: Color = Color::Rgb(90, 90, 100);

/// Panel title ("Task Plan")
pub const TITLE: Color = Color::Rgb(220, 220, 230);

/// Secondary text (counts, percentage)
pub const DIM_GRAY: Color = Color::Rgb(120, 120, 130);

// ============================================================================
// Progress Bar
// ============================================================================

/// Filled portion of the progress bar
pub const PROGRESS_FILL: Color = Color::Rgb(120, 230, 120);

/// Empty track of the progress bar
pub const PROGRESS_TRACK: Color = Color::Rgb(60, 60, 70);

// ============================================================================
// Status Colors
// ============================================================================

/// Normal todo text
pub const INK: Color = Color::Rgb(210, 210, 215);

/// Struck-through text of finished todos
pub const MUTED: Color = Color::Rgb(110, 110, 120);

/// Pending icon
pub const PENDING: Color = Color::Rgb(150, 150, 160);

/// In-progress icon and current-task text
pub const ACTIVE_BLUE: Color = Color::Rgb(100, 160, 255);

/// Background behind in-progress rows and the current-task highlight
pub const ACTIVE_BG: Color = Color::Rgb(25, 40, 70);

/// Completed icon
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

/// Cancelled icon
pub const ERROR_RED: Color = Color::Rgb(255, 100, 100);

// ============================================================================
// Styles
// ============================================================================

/// Text style for finished (completed or cancelled) todos
#[must_use]
pub fn finished_text() -> Style {
    Style::default()
        .fg(MUTED)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Text style for open todos
#[must_use]
pub fn open_text() -> Style {
    Style::default().fg(INK)
}

/// Style for the current-task highlight row
#[must_use]
pub fn current_highlight() -> Style {
    Style::default()
        .fg(ACTIVE_BLUE)
        .bg(ACTIVE_BG)
        .add_modifier(Modifier::BOLD)
}
