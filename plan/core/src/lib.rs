//! Plan Core - Task plan model for todo-panel
//!
//! This crate holds everything about an agent's task plan that does not
//! depend on a UI: the todo records, the summary shown in a panel header,
//! lenient JSON ingestion, and panel configuration. Surfaces (the terminal
//! panel today) consume these types and only render them.
//!
//! # Key Types
//!
//! - [`TodoItem`]: One entry in the plan
//! - [`TodoStatus`]: Lifecycle stage of a todo
//! - [`PlanSummary`]: Completed/total counts, percentage and current todo
//! - [`PanelConfig`]: Layered configuration (defaults, TOML, environment)

pub mod config;
pub mod error;
pub mod ingest;
pub mod summary;
pub mod todo;

pub use config::{GlyphSet, PanelConfig};
pub use error::{ConfigError, PlanError};
pub use ingest::{load_plan, parse_plan};
pub use summary::{percent, PlanSummary};
pub use todo::{current_todo, TodoId, TodoItem, TodoStatus};
