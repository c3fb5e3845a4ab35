use eastward::application::Navigator;
use eastward::domain::entities::Node;

use crate::ui::context::UiContext;
use crate::ui::widgets::tree_view::{render_tree, RowStyle};

/// Whole archive, fully expanded, one node per line
pub fn render_tree_listing(root: &Node, ui: &UiContext) -> String {
    let navigator = Navigator::new(root);
    let rows = navigator.visible_rows();
    let style = RowStyle {
        color: ui.color,
        unicode: ui.unicode,
        indent: ui.indent,
        gutter: false,
    };

    let mut out = String::new();
    for line in render_tree(&rows, None, 0, rows.len(), style, usize::MAX) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{} files in {} entries\n",
        root.file_count(),
        rows.len()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_contains_every_node_in_pre_order() {
        let root = Node::directory(
            "r",
            "R",
            vec![
                Node::directory("a", "A", vec![Node::file("x", "X", "x")]),
                Node::file("b", "B", "b"),
            ],
        );

        let out = render_tree_listing(&root, &UiContext::plain());

        assert_eq!(
            out,
            "[v] [D] R\n  [v] [D] A\n        [F] X\n      [F] B\n\n2 files in 4 entries\n"
        );
    }
}
