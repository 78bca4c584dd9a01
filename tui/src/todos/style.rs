//! Per-status decoration

use ratatui::style::{Color, Style};

use plan_core::{GlyphSet, TodoStatus};

use crate::theme;

/// How a todo row is drawn for a given status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoration {
    /// Status icon
    pub glyph: &'static str,
    /// Style of the status icon
    pub glyph_style: Style,
    /// Style of the todo text
    pub text_style: Style,
    /// Background for the whole row, if highlighted
    pub row_bg: Option<Color>,
}

/// Look up the decoration for a status
#[must_use]
pub fn decoration(status: TodoStatus, glyphs: GlyphSet) -> Decoration {
    let glyph = match (status, glyphs) {
        (TodoStatus::Pending, GlyphSet::Unicode) => "⬜",
        (TodoStatus::InProgress, GlyphSet::Unicode) => "🔄",
        (TodoStatus::Completed, GlyphSet::Unicode) => "✅",
        (TodoStatus::Cancelled, GlyphSet::Unicode) => "❌",
        (TodoStatus::Pending, GlyphSet::Ascii) => "[ ]",
        (TodoStatus::InProgress, GlyphSet::Ascii) => "[>]",
        (TodoStatus::Completed, GlyphSet::Ascii) => "[+]",
        (TodoStatus::Cancelled, GlyphSet::Ascii) => "[x]",
    };

    match status {
        TodoStatus::Pending => Decoration {
            glyph,
            glyph_style: Style::default().fg(theme::PENDING),
            text_style: theme::open_text(),
            row_bg: None,
        },
        TodoStatus::InProgress => Decoration {
            glyph,
            glyph_style: Style::default().fg(theme::ACTIVE_BLUE),
            text_style: theme::open_text(),
            row_bg: Some(theme::ACTIVE_BG),
        },
        TodoStatus::Completed => Decoration {
            glyph,
            glyph_style: Style::default().fg(theme::SUCCESS_GREEN),
            text_style: theme::finished_text(),
            row_bg: None,
        },
        TodoStatus::Cancelled => Decoration {
            glyph,
            glyph_style: Style::default().fg(theme::ERROR_RED),
            text_style: theme::finished_text(),
            row_bg: None,
        },
    }
}
