//! Property tests over generated trees and action sequences.

use proptest::prelude::*;

use eastward::application::{Navigator, Transition};
use eastward::domain::entities::{Node, NodeId};

/// Arbitrary tree with unique ids (`n0`, `n1`, ... in pre-order)
fn tree() -> impl Strategy<Value = Node> {
    let shape = Just(Shape::File).prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            Just(Shape::File),
            proptest::collection::vec(inner, 0..6).prop_map(Shape::Dir),
        ]
    });
    proptest::collection::vec(shape, 0..6).prop_map(|children| {
        let mut next = 0;
        build(&Shape::Dir(children), &mut next)
    })
}

#[derive(Debug, Clone)]
enum Shape {
    File,
    Dir(Vec<Shape>),
}

fn build(shape: &Shape, next: &mut usize) -> Node {
    let id = format!("n{}", *next);
    *next += 1;
    match shape {
        Shape::File => Node::file(id.clone(), format!("{}.md", id), id),
        Shape::Dir(children) => {
            let children = children.iter().map(|c| build(c, next)).collect();
            Node::directory(id.clone(), id, children)
        }
    }
}

fn ids(root: &Node) -> Vec<NodeId> {
    root.walk().map(|(_, n)| n.id().clone()).collect()
}

fn expand_states(nav: &Navigator<'_>) -> Vec<bool> {
    nav.root()
        .walk()
        .map(|(_, n)| nav.is_expanded(n.id()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Visible rows are a pre-order walk that skips exactly the
    /// descendants of collapsed directories.
    #[test]
    fn property_visible_rows_match_walk(
        root in tree(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..12)
    ) {
        let all = ids(&root);
        let mut nav = Navigator::new(&root);
        for pick in &picks {
            nav.toggle(pick.get(&all));
        }

        let mut expected = Vec::new();
        let mut hidden_below: Option<usize> = None;
        for (depth, node) in root.walk() {
            if let Some(limit) = hidden_below {
                if depth > limit {
                    continue;
                }
                hidden_below = None;
            }
            expected.push((node.id().clone(), depth));
            if node.is_directory() && !nav.is_expanded(node.id()) {
                hidden_below = Some(depth);
            }
        }

        let actual: Vec<_> = nav
            .visible_rows()
            .iter()
            .map(|r| (r.node.id().clone(), r.depth))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: Toggling any node twice restores every expand flag.
    #[test]
    fn property_toggle_is_involution(
        root in tree(),
        pick in any::<prop::sample::Index>()
    ) {
        let all = ids(&root);
        let target = pick.get(&all);
        let mut nav = Navigator::new(&root);
        let before = expand_states(&nav);

        nav.toggle(target);
        nav.toggle(target);

        prop_assert_eq!(expand_states(&nav), before);
    }

    /// PROPERTY: After any sequence of selects, at most one row is
    /// selected, it is a file, and it is the last file selected.
    #[test]
    fn property_single_selected_file(
        root in tree(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..16)
    ) {
        let all = ids(&root);
        let mut nav = Navigator::new(&root);
        let mut last_file = None;
        for pick in &picks {
            if let Transition::Selected(id) = nav.select(pick.get(&all)) {
                last_file = Some(id);
            }
        }

        prop_assert_eq!(nav.selected_id(), last_file.as_ref());
        let selected_count = root
            .walk()
            .filter(|(_, n)| nav.selected_id() == Some(n.id()))
            .count();
        prop_assert!(selected_count <= 1);
        if let Some(file) = nav.selected_file() {
            prop_assert!(file.is_file());
        }
    }

    /// PROPERTY: Selecting a file never changes any expand flag.
    #[test]
    fn property_file_select_keeps_expand_state(
        root in tree(),
        toggles in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
        pick in any::<prop::sample::Index>()
    ) {
        let all = ids(&root);
        let mut nav = Navigator::new(&root);
        for t in &toggles {
            nav.toggle(t.get(&all));
        }
        let files: Vec<_> = root
            .walk()
            .filter(|(_, n)| n.is_file())
            .map(|(_, n)| n.id().clone())
            .collect();
        prop_assume!(!files.is_empty());
        let before = expand_states(&nav);

        nav.select(pick.get(&files));

        prop_assert_eq!(expand_states(&nav), before);
    }
}
