//! Terminal rendering functions for the tree view.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use eastward::application::VisibleRow;

use crate::ui::primitives::text::truncate;
use crate::ui::primitives::Icon;
use crate::ui::theme;

/// Columns kept for the name when indentation runs out of room
const MIN_NAME_WIDTH: usize = 4;

/// Rendering options shared by every row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub color: bool,
    pub unicode: bool,
    /// Columns per depth level
    pub indent: usize,
    /// Reserve a leading column pair for the cursor and selection marks
    pub gutter: bool,
}

/// Render a single tree row, at most `width` columns wide
pub fn render_tree_row(
    row: &VisibleRow<'_>,
    is_cursor: bool,
    style: RowStyle,
    width: usize,
) -> String {
    let marker = match (is_cursor, row.selected) {
        _ if !style.gutter => "",
        (true, _) => "> ",
        (false, true) => "* ",
        (false, false) => "  ",
    };

    // Expansion icon (only for directories); files keep the column aligned
    let expander = if row.node.is_directory() {
        let icon = if row.expanded {
            Icon::Expand
        } else {
            Icon::Collapse
        };
        Some(icon)
    } else {
        None
    };
    let expander_width = Icon::Expand.render(style.unicode).width() + 1;
    let expander = match expander {
        Some(icon) => format!("{} ", icon.colored(style.color, style.unicode)),
        None => " ".repeat(expander_width),
    };

    let icon = Icon::for_node(row.node);
    let fixed_width = marker.width() + expander_width + icon.render(style.unicode).width() + 1;
    // Indentation gives way before the name does.
    let indent_width =
        (style.indent * row.depth).min(width.saturating_sub(fixed_width + MIN_NAME_WIDTH));
    let indent = " ".repeat(indent_width);
    let name = truncate(
        row.node.name(),
        width.saturating_sub(fixed_width + indent_width),
        style.unicode,
    );
    let name = if style.color && row.selected {
        format!("{}", name.bold())
    } else if style.color && is_cursor {
        format!("{}", name.reverse())
    } else {
        name
    };
    let marker = if style.color && is_cursor && style.gutter {
        format!("{}", marker.with(theme::colors::ARCHIVE))
    } else {
        marker.to_string()
    };

    format!(
        "{}{}{}{} {}",
        marker,
        indent,
        expander,
        icon.colored(style.color, style.unicode),
        name
    )
}

/// Render rows `[start, start + height)` of the tree
pub fn render_tree(
    rows: &[VisibleRow<'_>],
    cursor: Option<usize>,
    start: usize,
    height: usize,
    style: RowStyle,
    width: usize,
) -> Vec<String> {
    rows.iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(i, row)| render_tree_row(row, cursor == Some(i), style, width))
        .collect()
}
