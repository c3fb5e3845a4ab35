//! Selection port - how the navigator tells its host about selections
//!
//! The host receives the selected file node and is responsible for showing
//! its name and content.

use crate::domain::entities::Node;

/// Receives one notification per successful file selection
pub trait SelectionSink {
    fn on_select_file(&mut self, node: &Node);
}

impl<F> SelectionSink for F
where
    F: FnMut(&Node),
{
    fn on_select_file(&mut self, node: &Node) {
        self(node)
    }
}

/// Sink that ignores every selection
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSelectionSink;

impl SelectionSink for NoopSelectionSink {
    fn on_select_file(&mut self, _node: &Node) {}
}
