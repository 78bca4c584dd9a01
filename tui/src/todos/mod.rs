//! Todo Panel Module
//!
//! Displays an agent's task plan: a header with counts and percentage, a
//! progress bar, the todo currently being worked on, and the full list with
//! per-status decoration.

mod renderer;
mod style;

pub use renderer::TodoPanel;
pub use style::{decoration, Decoration};
