//! Full-screen browser frame: sidebar tree, detail pane, footer

use std::time::Instant;

use crossterm::style::Stylize;

use eastward::application::{Browser, ContentView};
use eastward::domain::ports::Clipboard;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::{pad, truncate};
use crate::ui::theme;
use crate::ui::views::file::{render_content, render_file_header, render_placeholder};
use crate::ui::widgets::tree_view::{render_tree, RowStyle};

/// Rows above the tree in the sidebar (title, version, rule)
const SIDEBAR_HEADER_ROWS: usize = 3;
/// Rows above the content in the detail pane (header, rule)
const DETAIL_HEADER_ROWS: usize = 2;

/// Lines of file content visible in a terminal of `height` rows
pub fn content_height(height: u16) -> usize {
    (height as usize).saturating_sub(1 + DETAIL_HEADER_ROWS).max(1)
}

/// Render one frame as exactly `height` lines
pub fn render_frame<C: Clipboard>(
    browser: &Browser<'_, C>,
    ui: &UiContext,
    width: u16,
    height: u16,
    now: Instant,
) -> Vec<String> {
    let width = width as usize;
    let height = height as usize;
    let body_height = height.saturating_sub(1);

    let mut lines = Vec::with_capacity(height);
    if browser.sidebar_open() {
        let sidebar_width = if ui.is_compact(width as u16) {
            width
        } else {
            (ui.sidebar_width as usize).min(width)
        };
        let sidebar = render_sidebar(browser, ui, sidebar_width, body_height);

        if sidebar_width + 1 >= width {
            lines.extend(sidebar);
        } else {
            let detail_width = width - sidebar_width - 1;
            let detail = render_detail(browser, ui, detail_width, body_height, now);
            let vertical = if ui.unicode {
                theme::borders::VERTICAL
            } else {
                theme::borders_ascii::VERTICAL
            };
            let vertical = if ui.color {
                format!("{}", vertical.with(theme::colors::DIM))
            } else {
                vertical.to_string()
            };
            for i in 0..body_height {
                let left = sidebar.get(i).map(String::as_str).unwrap_or("");
                let right = detail.get(i).map(String::as_str).unwrap_or("");
                lines.push(format!("{}{}{}", pad(left, sidebar_width), vertical, right));
            }
        }
    } else {
        lines.extend(render_detail(browser, ui, width, body_height, now));
    }

    lines.resize(body_height, String::new());
    lines.push(render_footer(browser, ui, width));
    lines.truncate(height);
    lines
}

fn rule(ui: &UiContext, width: usize) -> String {
    let h = if ui.unicode {
        theme::borders::HORIZONTAL
    } else {
        theme::borders_ascii::HORIZONTAL
    };
    let line = h.repeat(width);
    if ui.color {
        format!("{}", line.with(theme::colors::DIM))
    } else {
        line
    }
}

fn render_sidebar<C: Clipboard>(
    browser: &Browser<'_, C>,
    ui: &UiContext,
    width: usize,
    height: usize,
) -> Vec<String> {
    let title = truncate(theme::TITLE, width, ui.unicode);
    let version = truncate(theme::VERSION_TAG, width, ui.unicode);
    let mut lines = if ui.color {
        vec![
            format!("{}", title.bold()),
            format!("{}", version.with(theme::colors::DIM)),
        ]
    } else {
        vec![title, version]
    };
    lines.push(rule(ui, width));

    let tree_height = height.saturating_sub(SIDEBAR_HEADER_ROWS);
    let rows = browser.rows();
    // Keep the cursor row on screen.
    let start = if tree_height == 0 {
        0
    } else {
        (browser.cursor() + 1).saturating_sub(tree_height)
    };
    let style = RowStyle {
        color: ui.color,
        unicode: ui.unicode,
        indent: ui.indent,
        gutter: true,
    };
    lines.extend(render_tree(
        &rows,
        Some(browser.cursor()),
        start,
        tree_height,
        style,
        width,
    ));
    lines.truncate(height);
    lines
}

fn render_detail<C: Clipboard>(
    browser: &Browser<'_, C>,
    ui: &UiContext,
    width: usize,
    height: usize,
    now: Instant,
) -> Vec<String> {
    match browser.content_view(now) {
        ContentView::Placeholder => render_placeholder(ui, width, height),
        ContentView::File(view) => {
            let mut lines = vec![render_file_header(&view, ui, width), rule(ui, width)];
            lines.extend(render_content(
                view.content,
                browser.scroll(),
                height.saturating_sub(DETAIL_HEADER_ROWS),
                width,
                ui.unicode,
            ));
            lines.truncate(height);
            lines
        }
    }
}

fn render_footer<C: Clipboard>(browser: &Browser<'_, C>, ui: &UiContext, width: usize) -> String {
    match browser.status() {
        Some(status) => {
            let status = truncate(status, width, ui.unicode);
            if ui.color {
                format!("{}", status.with(theme::colors::ERROR))
            } else {
                status
            }
        }
        None => {
            let help = if ui.unicode {
                theme::HELP_BAR
            } else {
                theme::HELP_BAR_ASCII
            };
            let help = truncate(help, width, ui.unicode);
            if ui.color {
                format!("{}", help.with(theme::colors::DIM))
            } else {
                help
            }
        }
    }
}
