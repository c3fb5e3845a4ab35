//! The canonical Eastward Protocol archive
//!
//! Document bodies are compiled in from `archive/*.md`; building the tree
//! does no I/O and cannot fail.

use std::sync::OnceLock;

use crate::domain::entities::Node;

const MASTER_MANIFESTO: &str = include_str!("../../archive/MASTER_MANIFESTO.md");
const GOVERNANCE_PROTOCOL: &str = include_str!("../../archive/GOVERNANCE_PROTOCOL.md");
const AGENT_ALIGNMENT_CONTRACT: &str = include_str!("../../archive/AGENT_ALIGNMENT_CONTRACT.md");
const CHANGELOG: &str = include_str!("../../archive/CHANGELOG.md");
const DISCOGRAPHY_MASTER: &str = include_str!("../../archive/DISCOGRAPHY_MASTER.md");
const README_PUBLIC: &str = include_str!("../../archive/README_PUBLIC.md");

const ALBUM_CONCEPT: &str =
    "# ALBUM CONCEPT\n\n(See DISCOGRAPHY_MASTER.md for full canonical architecture)";
const TRACKLIST: &str =
    "# TRACKLIST\n\n(See DISCOGRAPHY_MASTER.md for full canonical tracklists)";
const CREATOR_AUTONOMY_FRAMEWORK: &str = "# CREATOR AUTONOMY FRAMEWORK\n\n\
1. Own your name.\n\
2. Own your data.\n\
3. Own your distribution.\n\n\
(Full framework pending expansion in v1.1)";
const INTERNET_ARCHIVE_EXPORT: &str =
    "# INTERNET ARCHIVE EXPORT LOG\n\nStatus: Pending v1.0 Sync";

/// Name of the archive root directory
pub const ROOT_NAME: &str = "EASTWARD_PROTOCOL";

/// Build the archive tree.
///
/// Deterministic and pure: every call returns an equal tree.
pub fn build() -> Node {
    Node::directory(
        "root",
        ROOT_NAME,
        vec![
            Node::directory(
                "00",
                "00_CANONICAL_CORE",
                vec![
                    Node::file("00-1", "MASTER_MANIFESTO.md", MASTER_MANIFESTO),
                    Node::file("00-2", "GOVERNANCE_PROTOCOL.md", GOVERNANCE_PROTOCOL),
                    Node::file("00-3", "AGENT_ALIGNMENT_CONTRACT.md", AGENT_ALIGNMENT_CONTRACT),
                    Node::file("00-4", "CHANGELOG.md", CHANGELOG),
                ],
            ),
            Node::directory(
                "01",
                "01_ALBUM_EASTWARD_PROTOCOL",
                vec![
                    Node::file("01-1", "DISCOGRAPHY_MASTER.md", DISCOGRAPHY_MASTER),
                    Node::file("01-2", "ALBUM_CONCEPT.md", ALBUM_CONCEPT),
                    Node::file("01-3", "TRACKLIST.md", TRACKLIST),
                ],
            ),
            Node::directory(
                "02",
                "02_LYRICS_AND_MUSIC",
                vec![
                    Node::directory("02-1", "GOOD_MORNING_PROJECT", vec![]),
                    Node::directory("02-2", "CONSCIOUS_ACTIONS", vec![]),
                ],
            ),
            Node::directory("03", "03_SCRIPTS_AND_ANALYSIS", vec![]),
            Node::directory(
                "04",
                "04_SYSTEMS_AND_AUTONOMY",
                vec![Node::file(
                    "04-1",
                    "CREATOR_AUTONOMY_FRAMEWORK.md",
                    CREATOR_AUTONOMY_FRAMEWORK,
                )],
            ),
            Node::directory("05", "05_LANGUAGE_AND_CULTURE", vec![]),
            Node::directory(
                "06",
                "06_PUBLIC_KNOWLEDGEBASE",
                vec![Node::file("06-1", "README_PUBLIC.md", README_PUBLIC)],
            ),
            Node::directory(
                "07",
                "07_ARCHIVE_AND_MIRRORS",
                vec![Node::file(
                    "07-1",
                    "INTERNET_ARCHIVE_EXPORT.md",
                    INTERNET_ARCHIVE_EXPORT,
                )],
            ),
            Node::directory("08", "08_EXPERIMENTAL", vec![]),
        ],
    )
}

/// The process-wide archive, built on first use
pub fn canonical() -> &'static Node {
    static ARCHIVE: OnceLock<Node> = OnceLock::new();
    ARCHIVE.get_or_init(build)
}
