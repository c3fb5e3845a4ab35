//! Error types for Eastward
//!
//! The tree model and the navigator are total and never fail. Errors only
//! come from the edges: path lookups requested by the CLI, the clipboard,
//! configuration and logging setup.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Eastward operations
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Main error type for Eastward operations
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// No node exists at the requested archive path
    #[error("no such entry in the archive: {path}")]
    NodeNotFound { path: String },

    /// The requested archive path names a directory
    #[error("'{path}' is a directory, not a file")]
    NotAFile { path: String },

    /// Two nodes share the same id
    #[error("duplicate node id '{id}' in archive tree")]
    DuplicateNodeId { id: String },

    /// Clipboard write failed
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Logging could not be initialized
    #[error("logging setup failed: {0}")]
    Logging(String),
}
