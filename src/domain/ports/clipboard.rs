//! Clipboard port - where copied file content goes
//!
//! Implementations:
//! - `Osc52Clipboard` - terminal clipboard via the OSC 52 escape sequence
//! - `MemoryClipboard` - in-memory, for tests and headless runs

use crate::error::ArchiveResult;

/// Destination for "copy full content" actions
pub trait Clipboard {
    /// Replace the clipboard content with `text`
    fn write_text(&mut self, text: &str) -> ArchiveResult<()>;
}

/// Clipboard that keeps the last written text in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> ArchiveResult<()> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn write_text(&mut self, text: &str) -> ArchiveResult<()> {
        (**self).write_text(text)
    }
}
