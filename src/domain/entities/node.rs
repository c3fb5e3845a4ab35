//! Node entity - the single building block of the archive tree
//!
//! A node is either a file carrying an immutable text payload or a
//! directory owning an ordered list of child nodes. Trees are built once
//! and never mutated; per-view display state lives elsewhere
//! (see `application::navigator::ViewState`).

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{ArchiveError, ArchiveResult};

/// Opaque, tree-unique node identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// File or directory payload
///
/// Encodes the "exactly one of content / children" rule in the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    File {
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    Directory {
        children: Vec<Node>,
    },
}

/// A single entry in the archive tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: NodeId,
    name: String,
    #[serde(flatten)]
    kind: NodeKind,
}

impl Node {
    /// Create a file node with a text payload
    pub fn file(id: impl Into<NodeId>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::File {
                content: Some(content.into()),
            },
        }
    }

    /// Create a file node that carries no payload at all
    pub fn empty_file(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::File { content: None },
        }
    }

    /// Create a directory node; child order is display order
    pub fn directory(id: impl Into<NodeId>, name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Directory { children },
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// File payload; `None` for directories and for files without content
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => content.as_deref(),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Directory children; always empty for files
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::File { .. } => &[],
            NodeKind::Directory { children } => children,
        }
    }

    /// Size of the file payload in bytes (0 for directories)
    pub fn byte_len(&self) -> usize {
        self.content().map(str::len).unwrap_or(0)
    }

    /// Direct child with exactly this name
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Find a node anywhere in this subtree by id
    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        self.walk().map(|(_, node)| node).find(|node| &node.id == id)
    }

    /// Pre-order, depth-first walk of this subtree (self at depth 0)
    pub fn walk(&self) -> PreOrder<'_> {
        PreOrder {
            stack: vec![(0, self)],
        }
    }

    /// Number of file nodes in this subtree
    pub fn file_count(&self) -> usize {
        self.walk().filter(|(_, node)| node.is_file()).count()
    }

    /// Check that every id in the subtree is unique
    pub fn validate(&self) -> ArchiveResult<()> {
        let mut seen = HashSet::new();
        for (_, node) in self.walk() {
            if !seen.insert(&node.id) {
                return Err(ArchiveError::DuplicateNodeId {
                    id: node.id.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Pre-order iterator over a node subtree, yielding `(depth, node)`
///
/// Children are visited in their stored order.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reverse push keeps the first child on top of the stack.
        for child in node.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}
