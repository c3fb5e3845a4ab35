//! Application Layer
//!
//! View-level state over the immutable archive tree:
//!
//! - `navigator` - expand/collapse flags and the single selected file
//! - `presenter` - verbatim content view and the copy action
//! - `browser` - interactive session combining both with a cursor

pub mod browser;
pub mod navigator;
pub mod presenter;

pub use browser::{Browser, BrowserAction};
pub use navigator::{Navigator, Transition, ViewState, VisibleRow};
pub use presenter::{
    ContentPresenter, ContentView, CopyIndicator, CopyOutcome, FileView, COPY_FEEDBACK,
    PLACEHOLDER_HINT, PLACEHOLDER_TITLE,
};
