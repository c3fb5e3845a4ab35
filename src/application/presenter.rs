//! Content presenter
//!
//! Shows the selected file verbatim and owns the "copy full content"
//! action together with its transient "copied" indicator.

use std::time::{Duration, Instant};

use tracing::info;

use crate::domain::entities::Node;
use crate::domain::ports::Clipboard;
use crate::domain::value_objects::{classify, Category};
use crate::error::ArchiveResult;

/// How long the "copied" indicator stays on after a copy
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Title shown when no file is selected
pub const PLACEHOLDER_TITLE: &str = "Eastward Protocol Archive";

/// Hint shown when no file is selected
pub const PLACEHOLDER_HINT: &str =
    "Select a file from the repository explorer to view the canonical artifacts.";

/// Transient "copied" flag with a fixed hold time.
///
/// A new copy restarts the hold (last write wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
    hold: Duration,
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK)
    }
}

impl CopyIndicator {
    pub fn new(hold: Duration) -> Self {
        Self {
            copied_at: None,
            hold,
        }
    }

    /// Turn the indicator on at `now`
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    /// Time left before the indicator clears, `None` when it is off
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let at = self.copied_at?;
        let elapsed = now.saturating_duration_since(at);
        (elapsed < self.hold).then(|| self.hold - elapsed)
    }

    /// Clear the indicator if its hold has elapsed.
    ///
    /// Returns true when the indicator went from on to off.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.copied_at.is_some() && !self.is_copied(now) {
            self.copied_at = None;
            return true;
        }
        false
    }
}

/// Result of a copy request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Content was written to the clipboard
    Copied { bytes: usize },
    /// No file is selected
    NothingSelected,
    /// The selected file has no or empty content
    NoContent,
}

/// What the detail pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView<'n> {
    Placeholder,
    File(FileView<'n>),
}

/// Detail pane content for a selected file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileView<'n> {
    pub name: &'n str,
    pub category: Category,
    pub bytes: usize,
    /// Content exactly as stored
    pub content: &'n str,
    pub copied: bool,
}

/// Verbatim content view plus the copy action
#[derive(Debug)]
pub struct ContentPresenter<C> {
    clipboard: C,
    indicator: CopyIndicator,
}

impl<C: Clipboard> ContentPresenter<C> {
    pub fn new(clipboard: C) -> Self {
        Self::with_feedback(clipboard, COPY_FEEDBACK)
    }

    pub fn with_feedback(clipboard: C, hold: Duration) -> Self {
        Self {
            clipboard,
            indicator: CopyIndicator::new(hold),
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn indicator(&self) -> &CopyIndicator {
        &self.indicator
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.indicator.is_copied(now)
    }

    /// Clear an elapsed indicator; true when the view changed
    pub fn expire(&mut self, now: Instant) -> bool {
        self.indicator.expire(now)
    }

    /// Copy the full content of `file` to the clipboard.
    ///
    /// Without a file or with empty content nothing happens. A failed
    /// clipboard write leaves the indicator untouched.
    pub fn copy(&mut self, file: Option<&Node>, now: Instant) -> ArchiveResult<CopyOutcome> {
        let Some(file) = file else {
            return Ok(CopyOutcome::NothingSelected);
        };
        let content = match file.content() {
            Some(content) if !content.is_empty() => content,
            _ => return Ok(CopyOutcome::NoContent),
        };

        self.clipboard.write_text(content)?;
        self.indicator.mark(now);
        info!(id = %file.id(), bytes = content.len(), "content copied");
        Ok(CopyOutcome::Copied {
            bytes: content.len(),
        })
    }

    /// Build the detail pane view for `file`
    pub fn view<'n>(&self, file: Option<&'n Node>, now: Instant) -> ContentView<'n> {
        match file {
            Some(node) if node.is_file() => ContentView::File(FileView {
                name: node.name(),
                category: classify(node.name()),
                bytes: node.byte_len(),
                content: node.content().unwrap_or_default(),
                copied: self.indicator.is_copied(now),
            }),
            _ => ContentView::Placeholder,
        }
    }
}
