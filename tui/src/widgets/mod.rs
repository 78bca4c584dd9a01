//! Widgets
//!
//! Small drawing helpers shared by panel renderers.

mod text;

pub use text::{set_truncated, truncate};
