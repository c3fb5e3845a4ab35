//! Navigator contracts: expand state, selection, initial lookup, order.

use std::cell::RefCell;
use std::rc::Rc;

use eastward::application::{Navigator, Transition};
use eastward::domain::entities::{Node, NodeId};

use crate::common::{sample_archive, small_tree};

fn id(s: &str) -> NodeId {
    NodeId::new(s)
}

fn expand_states(nav: &Navigator<'_>) -> Vec<(NodeId, bool)> {
    nav.root()
        .walk()
        .filter(|(_, n)| n.is_directory())
        .map(|(_, n)| (n.id().clone(), nav.is_expanded(n.id())))
        .collect()
}

/// CONTRACT: Toggling a directory twice restores its displayed state and
/// leaves every other directory alone.
#[test]
fn contract_toggle_twice_restores_state() {
    let root = sample_archive();
    let mut nav = Navigator::open(&root);
    nav.toggle(&id("01"));
    let before = expand_states(&nav);
    let rows_before = nav.visible_rows().len();

    nav.toggle(&id("00"));
    nav.toggle(&id("00"));

    assert_eq!(expand_states(&nav), before);
    assert_eq!(nav.visible_rows().len(), rows_before);
}

/// CONTRACT: Selecting the same file twice keeps it selected and touches
/// no directory.
#[test]
fn contract_select_is_idempotent() {
    let root = sample_archive();
    let mut nav = Navigator::new(&root);
    let before = expand_states(&nav);

    nav.select(&id("00-2"));
    nav.select(&id("00-2"));

    assert_eq!(nav.selected_id(), Some(&id("00-2")));
    assert_eq!(expand_states(&nav), before);
}

/// CONTRACT: At most one file is selected; a new selection replaces the old.
#[test]
fn contract_single_selection() {
    let root = sample_archive();
    let mut nav = Navigator::open(&root);

    nav.select(&id("00-2"));
    nav.select(&id("01-1"));

    let selected: Vec<_> = nav
        .visible_rows()
        .into_iter()
        .filter(|row| row.selected)
        .map(|row| row.node.id().clone())
        .collect();
    assert_eq!(selected, vec![id("01-1")]);
}

/// CONTRACT: Selecting a directory toggles it and never changes the selection.
#[test]
fn contract_select_directory_toggles_only_that_directory() {
    let root = sample_archive();
    let mut nav = Navigator::open(&root);

    let transition = nav.select(&id("01"));

    assert_eq!(
        transition,
        Transition::Toggled {
            id: id("01"),
            expanded: false
        }
    );
    assert_eq!(nav.selected_id(), Some(&id("00-1")));
    assert!(nav.is_expanded(&id("00")));
    assert!(nav.is_expanded(&id("03")));
}

/// CONTRACT: A collapsed directory keeps its descendants' stored state.
#[test]
fn contract_collapse_preserves_descendant_state() {
    let root = Node::directory(
        "r",
        "R",
        vec![Node::directory(
            "a",
            "A",
            vec![Node::directory("b", "B", vec![Node::file("f", "F", "f")])],
        )],
    );
    let mut nav = Navigator::new(&root);

    nav.toggle(&id("b"));
    nav.toggle(&id("a"));
    nav.toggle(&id("a"));

    assert!(!nav.is_expanded(&id("b")));
    let names: Vec<_> = nav.visible_rows().iter().map(|r| r.node.name()).collect();
    assert_eq!(names, vec!["R", "A", "B"]);
}

/// CONTRACT: The initial lookup selects the manifesto when it exists.
#[test]
fn contract_initial_selection() {
    let root = sample_archive();
    let nav = Navigator::open(&root);
    assert_eq!(nav.selected_file().map(Node::name), Some("MASTER_MANIFESTO.md"));

    let bare = small_tree();
    let nav = Navigator::open(&bare);
    assert!(nav.selected_id().is_none());
}

/// CONTRACT: Rows come out in pre-order with children in stored order.
#[test]
fn contract_pre_order_rows() {
    let root = small_tree();
    let nav = Navigator::new(&root);

    let rows: Vec<_> = nav
        .visible_rows()
        .iter()
        .map(|r| (r.node.name(), r.depth))
        .collect();

    assert_eq!(rows, vec![("R", 0), ("A", 1), ("X", 2), ("B", 1)]);
}

/// CONTRACT: The sink fires once per file selection and never for
/// directories or for the initial lookup.
#[test]
fn contract_sink_fires_once_per_file_selection() {
    let root = sample_archive();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let mut nav = Navigator::open(&root)
        .with_sink(move |node: &Node| log.borrow_mut().push(node.name().to_string()));

    nav.select(&id("00"));
    nav.select(&id("00-2"));
    nav.select(&id("00-2"));
    nav.select(&id("missing"));

    assert_eq!(
        *seen.borrow(),
        vec!["GOVERNANCE_PROTOCOL.md", "GOVERNANCE_PROTOCOL.md"]
    );
}

/// CONTRACT: Unknown ids are ignored.
#[test]
fn contract_unknown_ids_are_ignored() {
    let root = small_tree();
    let mut nav = Navigator::new(&root);

    assert_eq!(nav.select(&id("nope")), Transition::Ignored);
    assert_eq!(nav.toggle(&id("nope")), Transition::Ignored);
    assert_eq!(nav.visible_rows().len(), 4);
}
