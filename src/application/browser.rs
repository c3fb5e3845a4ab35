//! Interactive browsing session
//!
//! Ties the navigator and the content presenter to a keyboard cursor, a
//! detail-pane scroll offset and the sidebar visibility flag. Every user
//! action maps to exactly one [`BrowserAction`].

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::navigator::{Navigator, Transition, VisibleRow};
use super::presenter::{ContentPresenter, ContentView, CopyOutcome};
use crate::domain::entities::NodeId;
use crate::domain::ports::Clipboard;

/// Lines moved by a page scroll when no page size was set
const DEFAULT_PAGE_SIZE: usize = 20;

/// Browser action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Jump to the first row
    Top,
    /// Jump to the last row
    Bottom,
    /// Select the file under the cursor, or toggle the directory
    Activate,
    /// Expand the directory under the cursor
    Expand,
    /// Collapse the directory under the cursor
    Collapse,
    /// Copy the selected file's content
    Copy,
    /// Show or hide the sidebar
    ToggleSidebar,
    /// Scroll the detail pane one line up
    ScrollUp,
    /// Scroll the detail pane one line down
    ScrollDown,
    /// Scroll the detail pane one page up
    PageUp,
    /// Scroll the detail pane one page down
    PageDown,
    /// Leave the browser
    Quit,
}

/// Navigator + presenter + cursor
pub struct Browser<'t, C> {
    navigator: Navigator<'t>,
    presenter: ContentPresenter<C>,
    cursor: usize,
    scroll: usize,
    page_size: usize,
    sidebar_open: bool,
    compact: bool,
    status: Option<String>,
}

impl<'t, C: Clipboard> Browser<'t, C> {
    /// Start a session; the cursor starts on the selected file if any
    pub fn new(navigator: Navigator<'t>, presenter: ContentPresenter<C>) -> Self {
        let cursor = navigator
            .selected_id()
            .and_then(|id| {
                navigator
                    .visible_rows()
                    .iter()
                    .position(|row| row.node.id() == id)
            })
            .unwrap_or(0);

        Self {
            navigator,
            presenter,
            cursor,
            scroll: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sidebar_open: true,
            compact: false,
            status: None,
        }
    }

    pub fn navigator(&self) -> &Navigator<'t> {
        &self.navigator
    }

    pub fn presenter(&self) -> &ContentPresenter<C> {
        &self.presenter
    }

    pub fn rows(&self) -> Vec<VisibleRow<'t>> {
        self.navigator.visible_rows()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible line of the detail pane
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Message for the status line, e.g. a clipboard failure
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Lines moved by `PageUp` / `PageDown`
    pub fn set_page_size(&mut self, lines: usize) {
        self.page_size = lines.max(1);
    }

    /// Compact layout: selecting a file hides the sidebar
    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
    }

    pub fn content_view(&self, now: Instant) -> ContentView<'t> {
        self.presenter.view(self.navigator.selected_file(), now)
    }

    /// Time until the next self-driven redraw, if one is pending
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.presenter.indicator().remaining(now)
    }

    /// Advance timers; true when the screen needs a redraw
    pub fn tick(&mut self, now: Instant) -> bool {
        self.presenter.expire(now)
    }

    /// Apply one action. Returns true when the session should end.
    ///
    /// With the sidebar hidden the tree cursor is off screen: movement keys
    /// scroll the detail pane and tree actions are ignored.
    pub fn handle(&mut self, action: BrowserAction, now: Instant) -> bool {
        self.status = None;
        let Some(action) = self.route(action) else {
            return false;
        };
        let rows = self.navigator.visible_rows();
        let last = rows.len().saturating_sub(1);
        let cursor_id = rows.get(self.cursor).map(|row| row.node.id().clone());

        match action {
            BrowserAction::Up => self.cursor = self.cursor.saturating_sub(1),
            BrowserAction::Down => self.cursor = (self.cursor + 1).min(last),
            BrowserAction::Top => self.cursor = 0,
            BrowserAction::Bottom => self.cursor = last,
            BrowserAction::Activate => {
                if let Some(id) = cursor_id {
                    if let Transition::Selected(_) = self.navigator.select(&id) {
                        self.scroll = 0;
                        if self.compact {
                            self.sidebar_open = false;
                        }
                    }
                    self.relocate_cursor(&id);
                }
            }
            BrowserAction::Expand | BrowserAction::Collapse => {
                if let Some(id) = cursor_id {
                    self.navigator
                        .set_expanded(&id, action == BrowserAction::Expand);
                    self.relocate_cursor(&id);
                }
            }
            BrowserAction::Copy => self.copy(now),
            BrowserAction::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            BrowserAction::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            BrowserAction::ScrollDown => self.scroll_to(self.scroll + 1),
            BrowserAction::PageUp => self.scroll = self.scroll.saturating_sub(self.page_size),
            BrowserAction::PageDown => self.scroll_to(self.scroll + self.page_size),
            BrowserAction::Quit => return true,
        }
        false
    }

    /// Tree actions only apply while the sidebar is visible
    fn route(&mut self, action: BrowserAction) -> Option<BrowserAction> {
        if self.sidebar_open {
            return Some(action);
        }
        match action {
            BrowserAction::Up => Some(BrowserAction::ScrollUp),
            BrowserAction::Down => Some(BrowserAction::ScrollDown),
            BrowserAction::Top => {
                self.scroll = 0;
                None
            }
            BrowserAction::Bottom => {
                self.scroll_to(usize::MAX);
                None
            }
            BrowserAction::Activate | BrowserAction::Expand | BrowserAction::Collapse => None,
            _ => Some(action),
        }
    }

    fn copy(&mut self, now: Instant) {
        match self.presenter.copy(self.navigator.selected_file(), now) {
            Ok(CopyOutcome::Copied { bytes }) => debug!(bytes, "copy requested"),
            Ok(outcome) => debug!(?outcome, "copy skipped"),
            Err(e) => {
                warn!(error = %e, "copy failed");
                self.status = Some(e.to_string());
            }
        }
    }

    fn scroll_to(&mut self, line: usize) {
        let lines = self
            .navigator
            .selected_file()
            .and_then(|file| file.content())
            .map(|content| content.lines().count())
            .unwrap_or(0);
        self.scroll = line.min(lines.saturating_sub(1));
    }

    /// Keep the cursor on `id` after the row list changed, or clamp it
    /// into range when that node is no longer visible
    fn relocate_cursor(&mut self, id: &NodeId) {
        let rows = self.navigator.visible_rows();
        self.cursor = rows
            .iter()
            .position(|row| row.node.id() == id)
            .unwrap_or_else(|| self.cursor.min(rows.len().saturating_sub(1)));
    }
}
