//! Todo Panel Renderer
//!
//! Renders a task plan into a bordered panel:
//!
//! ```text
//! ╭──────────────────────────────────────╮
//! │📋 Task Plan  1/3 completed        33%│
//! │████████████░░░░░░░░░░░░░░░░░░░░░░░░░░│
//! │ ⠋ Write the parser                   │
//! │✅ Sketch the data model              │
//! │🔄 Write the parser                   │
//! │⬜ Add tests                          │
//! ╰──────────────────────────────────────╯
//! ```
//!
//! The panel is a pure function of its inputs: the same plan and spinner
//! frame always draw the same cells.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use plan_core::{GlyphSet, PanelConfig, PlanSummary, TodoItem};

use super::style::decoration;
use crate::spinner::spinner_frame;
use crate::theme;
use crate::widgets::set_truncated;

/// Smallest area the panel will draw into
const MIN_WIDTH: u16 = 10;
const MIN_HEIGHT: u16 = 3;

/// Rows taken by the border, header and progress bar
const CHROME_ROWS: u16 = 4;

/// Todo panel widget
#[derive(Clone, Debug)]
pub struct TodoPanel<'a> {
    todos: Option<&'a [TodoItem]>,
    glyphs: GlyphSet,
    max_rows: usize,
    spinner_frame: usize,
}

impl<'a> TodoPanel<'a> {
    /// Create a panel for a plan
    pub fn new(todos: &'a [TodoItem]) -> Self {
        Self::from_option(Some(todos))
    }

    /// Create a panel for a plan that may not exist yet
    pub fn from_option(todos: Option<&'a [TodoItem]>) -> Self {
        let defaults = PanelConfig::default();
        Self {
            todos,
            glyphs: defaults.glyphs,
            max_rows: defaults.max_rows,
            spinner_frame: 0,
        }
    }

    /// Apply glyph set and row limit from configuration
    pub fn config(self, config: &PanelConfig) -> Self {
        self.glyphs(config.glyphs).max_rows(config.max_rows)
    }

    /// Glyph set for status icons and chrome
    pub fn glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Maximum list rows; extra todos collapse into a "+N more" line
    pub fn max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows.max(1);
        self
    }

    /// Spinner frame for the current-task indicator
    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    /// Check if the panel has anything to show
    pub fn is_visible(&self) -> bool {
        self.todos.is_some_and(|t| !t.is_empty())
    }

    /// Height the panel needs to show everything it would draw
    ///
    /// Zero when there is nothing to show.
    pub fn height(&self) -> u16 {
        let Some(summary) = self.summary() else {
            return 0;
        };

        let current = u16::from(summary.current.is_some());
        let list = u16::try_from(summary.total.min(self.max_rows)).unwrap_or(u16::MAX);
        CHROME_ROWS.saturating_add(current).saturating_add(list)
    }

    fn summary(&self) -> Option<PlanSummary<'a>> {
        self.todos.and_then(PlanSummary::from_items)
    }

    fn ellipsis(&self) -> &'static str {
        match self.glyphs {
            GlyphSet::Unicode => "…",
            GlyphSet::Ascii => "...",
        }
    }

    /// Draw panel border
    fn draw_border(&self, buf: &mut Buffer, area: Rect) {
        let border_style = Style::default().fg(theme::BORDER);
        let (tl, tr, bl, br, horizontal, vertical) = match self.glyphs {
            GlyphSet::Unicode => ("╭", "╮", "╰", "╯", "─", "│"),
            GlyphSet::Ascii => ("+", "+", "+", "+", "-", "|"),
        };
        let span = horizontal.repeat(area.width.saturating_sub(2) as usize);

        // Top border
        buf.set_string(area.x, area.y, format!("{tl}{span}{tr}"), border_style);

        // Side borders
        for y in (area.y + 1)..(area.y + area.height.saturating_sub(1)) {
            buf.set_string(area.x, y, vertical, border_style);
            buf.set_string(area.x + area.width.saturating_sub(1), y, vertical, border_style);
        }

        // Bottom border
        buf.set_string(
            area.x,
            area.y + area.height.saturating_sub(1),
            format!("{bl}{span}{br}"),
            border_style,
        );
    }

    /// Draw title, counts and percentage on one line
    fn draw_header(&self, buf: &mut Buffer, summary: &PlanSummary<'_>, area: Rect) {
        let percent = format!("{}%", summary.percent);
        let percent_width = percent.len() as u16;
        buf.set_string(
            area.right().saturating_sub(percent_width),
            area.y,
            &percent,
            Style::default().fg(theme::DIM_GRAY),
        );

        let title = match self.glyphs {
            GlyphSet::Unicode => "📋 Task Plan",
            GlyphSet::Ascii => "Task Plan",
        };
        let counts = format!("  {}/{} completed", summary.completed, summary.total);

        // Percentage wins when the line is tight
        let room = area.width.saturating_sub(percent_width + 1);
        let used = set_truncated(
            buf,
            area.x,
            area.y,
            title,
            room,
            self.ellipsis(),
            Style::default().fg(theme::TITLE),
        );
        set_truncated(
            buf,
            area.x + used,
            area.y,
            &counts,
            room.saturating_sub(used),
            self.ellipsis(),
            Style::default().fg(theme::DIM_GRAY),
        );
    }

    /// Draw the progress bar, filled in proportion to the percentage
    fn draw_progress(&self, buf: &mut Buffer, percent: u8, area: Rect) {
        let width = area.width as usize;
        let filled = (percent as usize * width) / 100;
        let empty = width.saturating_sub(filled);
        let (fill, track) = match self.glyphs {
            GlyphSet::Unicode => ("█", "░"),
            GlyphSet::Ascii => ("#", "-"),
        };

        buf.set_string(
            area.x,
            area.y,
            fill.repeat(filled),
            Style::default().fg(theme::PROGRESS_FILL),
        );
        buf.set_string(
            area.x + filled as u16,
            area.y,
            track.repeat(empty),
            Style::default().fg(theme::PROGRESS_TRACK),
        );
    }

    /// Draw the highlighted current-task row
    fn draw_current(&self, buf: &mut Buffer, todo: &TodoItem, area: Rect) {
        let style = theme::current_highlight();
        buf.set_style(area, style);

        let spinner = spinner_frame(self.glyphs, self.spinner_frame);
        let (end_x, _) = buf.set_stringn(area.x + 1, area.y, spinner, area.width as usize, style);
        let text_x = end_x + 1;
        set_truncated(
            buf,
            text_x,
            area.y,
            &todo.content,
            area.right().saturating_sub(text_x),
            self.ellipsis(),
            style,
        );
    }

    /// Draw a single todo row
    fn draw_todo(&self, buf: &mut Buffer, todo: &TodoItem, area: Rect) {
        let deco = decoration(todo.status, self.glyphs);

        if let Some(bg) = deco.row_bg {
            buf.set_style(area, Style::default().bg(bg));
        }

        let (end_x, _) =
            buf.set_stringn(area.x, area.y, deco.glyph, area.width as usize, deco.glyph_style);
        let text_x = end_x + 1;
        set_truncated(
            buf,
            text_x,
            area.y,
            &todo.content,
            area.right().saturating_sub(text_x),
            self.ellipsis(),
            deco.text_style,
        );
    }

    /// Draw the list, collapsing the tail into "+N more" when it does not fit
    fn draw_list(&self, buf: &mut Buffer, todos: &[TodoItem], area: Rect) {
        let rows = (area.height as usize).min(self.max_rows);
        if rows == 0 {
            return;
        }

        let (shown, hidden) = if todos.len() <= rows {
            (todos.len(), 0)
        } else {
            (rows - 1, todos.len() - (rows - 1))
        };

        let mut y = area.y;
        for todo in &todos[..shown] {
            self.draw_todo(buf, todo, Rect::new(area.x, y, area.width, 1));
            y += 1;
        }

        if hidden > 0 {
            buf.set_stringn(
                area.x,
                y,
                format!("  +{hidden} more"),
                area.width as usize,
                Style::default().fg(theme::DIM_GRAY),
            );
        }
    }
}

impl Widget for TodoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

impl Widget for &TodoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return;
        }

        let (Some(todos), Some(summary)) = (self.todos, self.summary()) else {
            return;
        };

        self.draw_border(buf, area);

        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );

        let mut rows = inner.rows();

        if let Some(row) = rows.next() {
            self.draw_header(buf, &summary, row);
        }
        if let Some(row) = rows.next() {
            self.draw_progress(buf, summary.percent, row);
        }
        if let Some(current) = summary.current {
            if let Some(row) = rows.next() {
                self.draw_current(buf, current, row);
            }
        }

        if let Some(first) = rows.next() {
            let list_area = Rect::new(
                first.x,
                first.y,
                first.width,
                inner.bottom().saturating_sub(first.y),
            );
            self.draw_list(buf, todos, list_area);
        }
    }
}
