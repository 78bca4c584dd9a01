//! Plain-Text Rendering
//!
//! Renders a widget into an off-screen buffer and flattens it to text. Used
//! for one-shot output when there is no terminal to draw on.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

/// Flatten a buffer into lines, trimming trailing whitespace
///
/// Cells hidden behind a wide grapheme are skipped so the text lines up the
/// way a terminal would show it.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            let mut skip = 0usize;
            for x in area.left()..area.right() {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = buf[(x, y)].symbol();
                line.push_str(symbol);
                skip = symbol.width().saturating_sub(1);
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// Render a widget of known size to text lines
///
/// Returns no lines for a zero-sized area.
pub fn render_lines<W: Widget>(widget: W, width: u16, height: u16) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf);
    buffer_lines(&buf)
}
