use crossterm::style::Color;

/// Design tokens for the Eastward terminal UI.
///
/// All icons and borders must be sourced from this module.
pub mod colors {
    use super::Color;

    /// Manifestos and protocols (amber)
    pub const MANIFESTO: Color = Color::Yellow;
    /// Discographies (purple)
    pub const DISCOGRAPHY: Color = Color::Magenta;
    /// Readme files (blue)
    pub const README: Color = Color::Blue;
    /// Folders and generic files
    pub const ARCHIVE: Color = Color::Cyan;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const FOLDER: &str = "▣";
    pub const FILE: &str = "≡";
    pub const MANIFESTO: &str = "§";
    pub const DISCOGRAPHY: &str = "♫";
    pub const README: &str = "¶";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const COPY: &str = "⧉";
    pub const COPIED: &str = "✓";
}

pub mod icons_ascii {
    pub const FOLDER: &str = "[D]";
    pub const FILE: &str = "[F]";
    pub const MANIFESTO: &str = "[M]";
    pub const DISCOGRAPHY: &str = "[A]";
    pub const README: &str = "[R]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const COPY: &str = "[copy]";
    pub const COPIED: &str = "[ok]";
}

pub mod borders {
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Product line shown in the sidebar header
pub const TITLE: &str = "EASTWARD PROTOCOL";
/// Version tag shown under the title
pub const VERSION_TAG: &str = "v1.0.0 [CANONICAL]";

pub const COPY_LABEL: &str = "Raw Copy";
pub const COPIED_LABEL: &str = "Copied";

/// Key hints for the browser footer
pub const HELP_BAR: &str =
    "[↑↓] Move  [Enter] Open  [c] Copy  [s] Sidebar  [PgUp/PgDn] Scroll  [q] Quit";
pub const HELP_BAR_ASCII: &str =
    "[up/dn] Move  [Enter] Open  [c] Copy  [s] Sidebar  [PgUp/PgDn] Scroll  [q] Quit";
