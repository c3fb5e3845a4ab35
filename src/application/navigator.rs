//! Tree navigator and selector
//!
//! Walks an immutable [`Node`] tree and keeps the view-level state over it:
//! one expanded/collapsed flag per directory and a single selected file.
//! All changes go through explicit reducer-style transitions so the logic
//! stays independent of any rendering layer.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::entities::{Node, NodeId};
use crate::domain::ports::{NoopSelectionSink, SelectionSink};
use crate::domain::services::initial_file;

/// Mutable display state over an archive tree
///
/// Directories without a stored flag are expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    expanded: HashMap<NodeId, bool>,
    selected: Option<NodeId>,
}

impl ViewState {
    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.expanded.get(id).copied().unwrap_or(true)
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    fn set_expanded(&mut self, id: &NodeId, expanded: bool) {
        self.expanded.insert(id.clone(), expanded);
    }
}

/// Effect of a navigator transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A file became (or stayed) the selected file
    Selected(NodeId),
    /// A directory changed its expand state
    Toggled { id: NodeId, expanded: bool },
    /// Nothing changed
    Ignored,
}

/// A row of the rendered tree
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'t> {
    pub node: &'t Node,
    /// Depth level (0 = root)
    pub depth: usize,
    /// Whether this directory shows its children (always false for files)
    pub expanded: bool,
    /// Whether this row is the selected file
    pub selected: bool,
}

/// Expand/collapse and selection state machine over a borrowed tree
pub struct Navigator<'t> {
    root: &'t Node,
    index: HashMap<&'t NodeId, &'t Node>,
    state: ViewState,
    sink: Box<dyn SelectionSink + 't>,
}

impl<'t> Navigator<'t> {
    /// Create a navigator with every directory expanded and nothing selected
    pub fn new(root: &'t Node) -> Self {
        let index = root.walk().map(|(_, node)| (node.id(), node)).collect();
        Self {
            root,
            index,
            state: ViewState::default(),
            sink: Box::new(NoopSelectionSink),
        }
    }

    /// Create a navigator and run the fixed initial lookup.
    ///
    /// Selects `00_CANONICAL_CORE/MASTER_MANIFESTO.md` when it exists;
    /// otherwise starts with nothing selected. The sink is not notified.
    pub fn open(root: &'t Node) -> Self {
        let mut navigator = Self::new(root);
        match initial_file(root) {
            Some(file) => {
                debug!(id = %file.id(), "initial selection");
                navigator.state.selected = Some(file.id().clone());
            }
            None => debug!("initial file not found; starting with empty selection"),
        }
        navigator
    }

    /// Attach the host's selection sink
    pub fn with_sink(mut self, sink: impl SelectionSink + 't) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn root(&self) -> &'t Node {
        self.root
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// Look up a node of this tree by id
    pub fn node(&self, id: &NodeId) -> Option<&'t Node> {
        self.index.get(id).copied()
    }

    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.state.is_expanded(id)
    }

    pub fn selected_id(&self) -> Option<&NodeId> {
        self.state.selected()
    }

    /// The currently selected file node
    pub fn selected_file(&self) -> Option<&'t Node> {
        self.state.selected().and_then(|id| self.node(id))
    }

    /// Flip a directory between expanded and collapsed.
    ///
    /// Descendants keep their own stored state.
    pub fn toggle(&mut self, id: &NodeId) -> Transition {
        match self.node(id) {
            Some(node) if node.is_directory() => {
                let expanded = !self.state.is_expanded(id);
                self.apply_expanded(node, expanded)
            }
            _ => Transition::Ignored,
        }
    }

    /// Explicitly expand or collapse a directory
    pub fn set_expanded(&mut self, id: &NodeId, expanded: bool) -> Transition {
        match self.node(id) {
            Some(node) if node.is_directory() && self.state.is_expanded(id) != expanded => {
                self.apply_expanded(node, expanded)
            }
            _ => Transition::Ignored,
        }
    }

    /// Click semantics: select a file, or toggle a directory.
    ///
    /// Selecting a file replaces the previous selection and notifies the
    /// sink once. Directories are never selected.
    pub fn select(&mut self, id: &NodeId) -> Transition {
        let Some(node) = self.node(id) else {
            return Transition::Ignored;
        };
        if node.is_directory() {
            return self.toggle(id);
        }

        debug!(id = %node.id(), name = node.name(), "file selected");
        self.state.selected = Some(node.id().clone());
        self.sink.on_select_file(node);
        Transition::Selected(node.id().clone())
    }

    /// Rows to render: pre-order, children in stored order, skipping the
    /// descendants of collapsed directories
    pub fn visible_rows(&self) -> Vec<VisibleRow<'t>> {
        let mut rows = Vec::new();
        self.collect_rows(self.root, 0, &mut rows);
        rows
    }

    fn collect_rows(&self, node: &'t Node, depth: usize, rows: &mut Vec<VisibleRow<'t>>) {
        let expanded = node.is_directory() && self.state.is_expanded(node.id());
        rows.push(VisibleRow {
            node,
            depth,
            expanded,
            selected: self.state.selected() == Some(node.id()),
        });

        if expanded {
            for child in node.children() {
                self.collect_rows(child, depth + 1, rows);
            }
        }
    }

    fn apply_expanded(&mut self, node: &'t Node, expanded: bool) -> Transition {
        debug!(id = %node.id(), expanded, "directory toggled");
        self.state.set_expanded(node.id(), expanded);
        Transition::Toggled {
            id: node.id().clone(),
            expanded,
        }
    }
}
