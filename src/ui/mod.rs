//! Terminal UI
//!
//! - `theme` - design tokens (colors, icons, borders)
//! - `terminal` / `context` - capability detection and resolved settings
//! - `primitives` - icons and width-aware text helpers
//! - `widgets` - the tree view
//! - `views` - screens composed from widgets

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
