//! Domain entities
//!
//! The archive is a single tree of [`Node`]s.

mod node;

pub use node::{Node, NodeId, NodeKind, PreOrder};
