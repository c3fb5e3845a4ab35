//! Archive contracts: the compiled-in tree is well formed.

use std::collections::HashSet;

use eastward::application::Navigator;
use eastward::domain::services::resolve_path;
use eastward::infrastructure::archive::{build, canonical, ROOT_NAME};

/// CONTRACT: Every node id is unique.
#[test]
fn contract_ids_unique() {
    let root = canonical();
    let mut seen = HashSet::new();
    for (_, node) in root.walk() {
        assert!(seen.insert(node.id().clone()), "duplicate id {}", node.id());
    }
    assert!(root.validate().is_ok());
}

/// CONTRACT: Files carry no children and directories carry no content.
#[test]
fn contract_nodes_are_files_xor_directories() {
    for (_, node) in canonical().walk() {
        if node.is_file() {
            assert!(node.children().is_empty());
        } else {
            assert!(node.content().is_none());
        }
    }
}

/// CONTRACT: The explorer opens on the master manifesto.
#[test]
fn contract_archive_opens_on_manifesto() {
    let nav = Navigator::open(canonical());
    let file = nav.selected_file().unwrap();

    assert_eq!(file.name(), "MASTER_MANIFESTO.md");
    let content = file.content().unwrap();
    assert!(content.starts_with("# EASTWARD PROTOCOL"));
    assert!(content.ends_with("We are Eastward.\n"));
}

/// CONTRACT: The archive is deterministic and shared.
#[test]
fn contract_archive_is_deterministic() {
    assert_eq!(&build(), canonical());
    assert!(std::ptr::eq(canonical(), canonical()));
    assert_eq!(canonical().name(), ROOT_NAME);
}

/// CONTRACT: Every file is reachable by its name path.
#[test]
fn contract_every_file_resolves_by_path() {
    let root = canonical();
    let mut path: Vec<&str> = Vec::new();
    for (depth, node) in root.walk() {
        path.truncate(depth.saturating_sub(1));
        if depth > 0 {
            path.push(node.name());
        }
        if node.is_file() {
            let found = resolve_path(root, &path.join("/")).unwrap();
            assert_eq!(found.id(), node.id());
        }
    }
}
