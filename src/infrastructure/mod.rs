//! Infrastructure Layer
//!
//! Concrete implementations behind the domain: the compiled-in archive
//! and the terminal clipboard.
//!
//! ## Structure
//!
//! - `archive` - builds the canonical archive tree
//! - `clipboard` - OSC 52 implementation of the `Clipboard` port

pub mod archive;
pub mod clipboard;

pub use archive::{build, canonical};
pub use clipboard::Osc52Clipboard;
