//! Viewer Application
//!
//! The App keeps a plan file on screen:
//! - Event loop (keyboard, resize) multiplexed with a frame tick
//! - Reloads the plan whenever the file's modification time changes
//! - Advances the spinner and redraws every frame
//!
//! The plan is only ever read. A plan that fails to parse leaves the last
//! good one on screen with the error in the status line.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use ratatui::Terminal;
use tracing::{debug, warn};

use plan_core::{parse_plan, PanelConfig, PlanSummary, TodoItem};

use crate::spinner::SpinnerClock;
use crate::theme;
use crate::todos::TodoPanel;
use crate::widgets::set_truncated;

/// Status line height
const STATUS_HEIGHT: u16 = 1;

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Plan file being watched
    source: PathBuf,
    /// Panel configuration
    config: PanelConfig,
    /// Last successfully loaded plan
    todos: Option<Vec<TodoItem>>,
    /// Modification time of the last read
    last_modified: Option<SystemTime>,
    /// Error from the most recent reload, if it failed
    load_error: Option<String>,
    /// Spinner animation clock
    spinner: SpinnerClock,
    /// Last frame time (for animations)
    last_frame: Instant,
}

impl App {
    /// Create a new App watching `source`
    pub fn new(source: PathBuf, config: PanelConfig) -> Self {
        Self {
            running: true,
            source,
            spinner: SpinnerClock::new(Duration::from_millis(config.tick_ms)),
            config,
            todos: None,
            last_modified: None,
            load_error: None,
            last_frame: Instant::now(),
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticker = tokio::time::interval(Duration::from_millis(self.config.tick_ms));

        self.reload().await;
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events first so quitting stays responsive
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        // Only handle Press events (not Release or Repeat)
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            warn!(error = %e, "Terminal event error");
                        }
                        None => self.running = false,
                    }
                }

                _ = ticker.tick() => {
                    self.reload().await;
                    self.update();
                }
            }

            self.render(terminal)?;
        }

        Ok(())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            _ => {}
        }
    }

    /// Whether the event loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Currently displayed plan
    pub fn todos(&self) -> Option<&[TodoItem]> {
        self.todos.as_deref()
    }

    /// Error from the last reload attempt
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Re-read the plan if the file changed since the last read
    pub async fn reload(&mut self) {
        let modified = match tokio::fs::metadata(&self.source).await {
            Ok(meta) => meta.modified().ok(),
            Err(e) => {
                self.set_load_error(format!("cannot read {}: {e}", self.source.display()));
                return;
            }
        };

        if modified.is_some() && modified == self.last_modified {
            return;
        }

        let text = match tokio::fs::read_to_string(&self.source).await {
            Ok(text) => text,
            Err(e) => {
                self.set_load_error(format!("cannot read {}: {e}", self.source.display()));
                return;
            }
        };

        // Remember the mtime even on parse failure so a broken file is not
        // re-read every frame
        self.last_modified = modified;

        match parse_plan(&text) {
            Ok(todos) => {
                debug!(path = ?self.source, count = todos.len(), "Plan reloaded");
                self.todos = Some(todos);
                self.load_error = None;
            }
            Err(e) => self.set_load_error(e.to_string()),
        }
    }

    fn set_load_error(&mut self, message: String) {
        if self.load_error.as_deref() != Some(message.as_str()) {
            warn!(path = ?self.source, error = %message, "Plan reload failed");
        }
        self.load_error = Some(message);
    }

    /// Advance animations
    fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.spinner.update(delta);
    }

    /// Render the UI
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            self.draw(area, frame.buffer_mut());
        })?;
        Ok(())
    }

    /// Draw the panel and status line into a buffer
    pub fn draw(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let body = Rect::new(
            area.x,
            area.y,
            area.width,
            area.height.saturating_sub(STATUS_HEIGHT),
        );

        let panel = TodoPanel::from_option(self.todos())
            .config(&self.config)
            .spinner_frame(self.spinner.frame());

        if panel.is_visible() {
            let height = panel.height().min(body.height);
            panel.render(Rect::new(body.x, body.y, body.width, height), buf);
        } else if body.height > 0 {
            let message = if self.todos.is_some() {
                "Plan is empty"
            } else {
                "Waiting for plan..."
            };
            buf.set_stringn(
                body.x + 1,
                body.y,
                message,
                body.width.saturating_sub(1) as usize,
                Style::default().fg(theme::DIM_GRAY),
            );
        }

        self.draw_status(Rect::new(area.x, area.bottom() - STATUS_HEIGHT, area.width, 1), buf);
    }

    /// Draw the status line
    fn draw_status(&self, area: Rect, buf: &mut Buffer) {
        let (text, style) = match &self.load_error {
            Some(err) => (err.clone(), Style::default().fg(theme::ERROR_RED)),
            None => {
                let progress = self
                    .todos()
                    .and_then(PlanSummary::from_items)
                    .map(|summary| format!("  {}", remaining_work(&summary)))
                    .unwrap_or_default();
                (
                    format!("{}{progress}  (q to quit)", self.source.display()),
                    Style::default().fg(theme::DIM_GRAY),
                )
            }
        };
        set_truncated(buf, area.x, area.y, &text, area.width, "…", style);
    }
}

/// Describe what is left of a plan, e.g. "1 in progress, 2 pending, 1 cancelled"
fn remaining_work(summary: &PlanSummary<'_>) -> String {
    if summary.is_finished() && summary.cancelled == 0 {
        return "all done".to_string();
    }

    let parts: Vec<String> = [
        (summary.in_progress, "in progress"),
        (summary.pending, "pending"),
        (summary.cancelled, "cancelled"),
    ]
    .iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, label)| format!("{count} {label}"))
    .collect();

    if summary.is_finished() {
        format!("finished, {}", parts.join(", "))
    } else {
        parts.join(", ")
    }
}
