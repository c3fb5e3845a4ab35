//! Name-based path lookups
//!
//! Lookups descend from a root by exact string equality on node names.
//! No fuzzy matching and no case folding.

use crate::domain::entities::Node;
use crate::error::{ArchiveError, ArchiveResult};

/// Well-known location of the file selected when the explorer opens
pub const INITIAL_FILE_PATH: [&str; 2] = ["00_CANONICAL_CORE", "MASTER_MANIFESTO.md"];

/// Descend from `root` through `segments`, one child name per level.
///
/// An empty segment list resolves to `root` itself.
pub fn resolve<'a>(root: &'a Node, segments: &[&str]) -> Option<&'a Node> {
    segments
        .iter()
        .try_fold(root, |node, segment| node.child(segment))
}

/// Split a slash-separated archive path into name segments.
///
/// Leading, trailing and repeated slashes are ignored.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolve a slash-separated path below `root`
pub fn resolve_path<'a>(root: &'a Node, path: &str) -> ArchiveResult<&'a Node> {
    resolve(root, &split_path(path)).ok_or_else(|| ArchiveError::NodeNotFound {
        path: path.to_string(),
    })
}

/// Resolve a slash-separated path that must name a file
pub fn resolve_file<'a>(root: &'a Node, path: &str) -> ArchiveResult<&'a Node> {
    let node = resolve_path(root, path)?;
    if node.is_directory() {
        return Err(ArchiveError::NotAFile {
            path: path.to_string(),
        });
    }
    Ok(node)
}

/// The fixed initial lookup.
///
/// Returns the file at [`INITIAL_FILE_PATH`] if both segments exist and the
/// last one is a file; otherwise `None`, meaning nothing is selected.
pub fn initial_file(root: &Node) -> Option<&Node> {
    resolve(root, &INITIAL_FILE_PATH).filter(|node| node.is_file())
}
