//! Ports - interfaces the core consumes or exposes to its host

mod clipboard;
mod selection;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use selection::{NoopSelectionSink, SelectionSink};
