//! Reusable archive trees.

use eastward::domain::entities::Node;

/// `R[A[X], B]`
pub fn small_tree() -> Node {
    Node::directory(
        "r",
        "R",
        vec![
            Node::directory("a", "A", vec![Node::file("x", "X", "x body")]),
            Node::file("b", "B", "b body"),
        ],
    )
}

/// An archive with the well-known initial file and a few siblings
pub fn sample_archive() -> Node {
    Node::directory(
        "root",
        "EASTWARD_PROTOCOL",
        vec![
            Node::directory(
                "00",
                "00_CANONICAL_CORE",
                vec![
                    Node::file("00-1", "MASTER_MANIFESTO.md", "# MANIFESTO\n\nWe are Eastward.\n"),
                    Node::file("00-2", "GOVERNANCE_PROTOCOL.md", "# GOVERNANCE\n"),
                ],
            ),
            Node::directory(
                "01",
                "01_ALBUM_EASTWARD_PROTOCOL",
                vec![Node::file("01-1", "DISCOGRAPHY_MASTER.md", "# DISCOGRAPHY\n")],
            ),
            Node::directory("03", "03_SCRIPTS_AND_ANALYSIS", vec![]),
            Node::file("r-1", "EMPTY.md", ""),
        ],
    )
}
