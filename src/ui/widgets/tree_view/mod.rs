//! Tree View Widget
//!
//! Renders the navigator's visible rows as an indented tree and maps
//! keyboard events to browser actions.
//!
//! # Module Structure
//!
//! - `render` - Row rendering to strings
//! - `input` - Keyboard mapping

mod input;
mod render;

pub use input::key_to_action;
pub use render::{render_tree, render_tree_row, RowStyle};
