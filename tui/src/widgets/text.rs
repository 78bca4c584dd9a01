//! Truncated Text
//!
//! Single-line text that is cut to a display width with an ellipsis.

use std::borrow::Cow;

use ratatui::buffer::Buffer;
use ratatui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` display columns
///
/// Text that fits is returned unchanged. Otherwise it is shortened and
/// `ellipsis` appended, so the result is never wider than `max_width`.
pub fn truncate<'a>(text: &'a str, max_width: usize, ellipsis: &str) -> Cow<'a, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }

    let ellipsis_width = ellipsis.width();
    if max_width <= ellipsis_width {
        // No room for any content, so fall back to a hard cut
        return Cow::Owned(take_width(text, max_width).to_string());
    }

    let kept = take_width(text, max_width - ellipsis_width);
    Cow::Owned(format!("{}{}", kept.trim_end(), ellipsis))
}

/// Longest prefix of `text` that fits in `width` columns
fn take_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Draw truncated text and return the columns used
pub fn set_truncated(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    text: &str,
    max_width: u16,
    ellipsis: &str,
    style: Style,
) -> u16 {
    let text = truncate(text, max_width as usize, ellipsis);
    let (end_x, _) = buf.set_stringn(x, y, text.as_ref(), max_width as usize, style);
    end_x.saturating_sub(x)
}
