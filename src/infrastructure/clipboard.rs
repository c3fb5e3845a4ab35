//! OSC 52 clipboard
//!
//! Sets the system clipboard by emitting the OSC 52 escape sequence to the
//! terminal. Works locally and over SSH in terminals that support it; the
//! terminal gives no acknowledgement, so a successful write only means the
//! sequence was flushed.

use std::io::{self, Write};

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use tracing::debug;

use crate::domain::ports::Clipboard;
use crate::error::{ArchiveError, ArchiveResult};

/// Clipboard backed by the terminal's OSC 52 support
#[derive(Debug)]
pub struct Osc52Clipboard<W> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    /// Write the escape sequence to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> ArchiveResult<()> {
        execute!(self.out, CopyToClipboard::to_clipboard_from(text))
            .map_err(|e| ArchiveError::Clipboard(e.to_string()))?;
        debug!(bytes = text.len(), "osc52 sequence written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_osc52_sequence() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.write_text("hello").unwrap();

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert!(written.starts_with("\x1b]52;"), "got {:?}", written);
        // base64("hello")
        assert!(written.contains("aGVsbG8="), "got {:?}", written);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_maps_to_clipboard_error() {
        let mut clipboard = Osc52Clipboard::new(BrokenPipe);
        let err = clipboard.write_text("hello").unwrap_err();
        assert!(matches!(err, ArchiveError::Clipboard(_)));
    }
}
