//! Todo Panel Entry Point
//!
//! Shows an agent's task plan in the terminal.
//!
//! Usage:
//!   todo-panel [OPTIONS] [PLAN]
//!
//! With a TTY, the plan file stays on screen and is redrawn whenever it
//! changes. Without one (or with `--once`, or when reading stdin) a single
//! frame is printed as plain text.
//!
//! # Environment Variables
//!
//! - `TODO_PANEL_CONFIG`: Config file path
//! - `TODO_PANEL_LOG`: Write logs to this file in interactive mode
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)

use std::fs::File;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plan_core::{parse_plan, GlyphSet, PanelConfig};
use todo_panel_tui::render::render_lines;
use todo_panel_tui::{App, TodoPanel};

/// Output width for one-shot rendering
const DEFAULT_WIDTH: u16 = 60;

/// Render an agent's task plan with progress
#[derive(Debug, Parser)]
#[command(name = "todo-panel", version, about)]
struct Args {
    /// Plan JSON file, or "-" for stdin
    #[arg(default_value = "-")]
    plan: PathBuf,

    /// Print a single frame as plain text and exit
    #[arg(long)]
    once: bool,

    /// Output width for --once
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u16,

    /// Use ASCII glyphs instead of emoji
    #[arg(long)]
    ascii: bool,

    /// Maximum list rows before collapsing into "+N more"
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_rows: Option<u64>,

    /// TOML config file
    #[arg(long, env = "TODO_PANEL_CONFIG")]
    config: Option<PathBuf>,
}

impl Args {
    fn reads_stdin(&self) -> bool {
        self.plan.as_os_str() == "-"
    }

    /// Load config from file/environment and apply command-line flags
    fn panel_config(&self) -> anyhow::Result<PanelConfig> {
        let config = PanelConfig::load(self.config.as_deref())?;
        Ok(self.apply_flags(config))
    }

    /// Command-line flags win over every other config source
    fn apply_flags(&self, mut config: PanelConfig) -> PanelConfig {
        if self.ascii {
            config.glyphs = GlyphSet::Ascii;
        }
        if let Some(rows) = self.max_rows {
            config.max_rows = usize::try_from(rows).unwrap_or(usize::MAX);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let interactive = !args.once
        && !args.reads_stdin()
        && io::stdin().is_terminal()
        && io::stdout().is_terminal();

    init_logging(interactive)?;

    let config = args.panel_config()?;

    if interactive {
        run_interactive(args.plan, config).await
    } else {
        print_once(&args, &config).await
    }
}

/// Set up logging
///
/// Interactive mode owns the screen, so logs only go to `TODO_PANEL_LOG`
/// when it is set.
fn init_logging(interactive: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
        return Ok(());
    }

    if let Some(path) = std::env::var_os("TODO_PANEL_LOG") {
        let file = File::create(&path)
            .with_context(|| format!("failed to create log file {}", Path::new(&path).display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    Ok(())
}

/// Render one frame to stdout
async fn print_once(args: &Args, config: &PanelConfig) -> anyhow::Result<()> {
    let json = if args.reads_stdin() {
        let mut json = String::new();
        tokio::io::stdin()
            .read_to_string(&mut json)
            .await
            .context("failed to read plan from stdin")?;
        json
    } else {
        tokio::fs::read_to_string(&args.plan)
            .await
            .with_context(|| format!("failed to read plan {}", args.plan.display()))?
    };

    let todos = parse_plan(&json)?;
    let panel = TodoPanel::new(&todos).config(config);
    let height = panel.height();

    for line in render_lines(&panel, args.width, height) {
        println!("{line}");
    }

    Ok(())
}

/// Keep the plan on screen until the user quits
async fn run_interactive(plan: PathBuf, config: PanelConfig) -> anyhow::Result<()> {
    info!(path = ?plan, "Starting todo panel");

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut terminal = restore_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
            terminal.clear()?;
            Ok(terminal)
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )?;

    let mut app = App::new(plan, config);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Run `setup`, calling `restore` first if it fails
///
/// Raw mode is already on when the screen is set up, so a failure there must
/// not leave the user's shell in raw mode.
fn restore_on_error<T>(
    setup: impl FnOnce() -> anyhow::Result<T>,
    restore: impl FnOnce(),
) -> anyhow::Result<T> {
    setup().inspect_err(|_| restore())
}
