//! Todo Panel TUI - Terminal surface for agent task plans
//!
//! This crate renders a task plan (from `plan-core`) as a terminal panel:
//! a header with completed/total counts and percentage, a progress bar, the
//! todo currently being worked on, and the full list with per-status icons.
//!
//! # Architecture
//!
//! - **Todos**: The [`TodoPanel`] widget, a pure render of a plan
//! - **Spinner**: Frame clock for the current-task indicator
//! - **Render**: Off-screen rendering to plain text
//! - **App**: Full-screen viewer that reloads a plan file as it changes

pub mod app;
pub mod render;
pub mod spinner;
pub mod theme;
pub mod todos;
pub mod widgets;

pub use app::App;
pub use todos::TodoPanel;
