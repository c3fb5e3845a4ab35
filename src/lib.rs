//! Eastward - explorer for the Eastward Protocol archive
//!
//! The archive is a fixed, in-memory tree of folders and text documents.
//! This crate holds the tree model, the navigator that owns expansion and
//! selection, the content presenter with its copy action, and the ambient
//! configuration and logging used by the `eastward` binary.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{Browser, BrowserAction, ContentPresenter, ContentView, Navigator};
pub use config::Config;
pub use domain::entities::{Node, NodeId, NodeKind};
pub use domain::value_objects::{classify, Category};
pub use error::{ArchiveError, ArchiveResult};
