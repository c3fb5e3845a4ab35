//! Detail pane: file header, verbatim content, placeholder

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use eastward::application::{FileView, PLACEHOLDER_HINT, PLACEHOLDER_TITLE};

use crate::ui::context::UiContext;
use crate::ui::primitives::text::{sanitize_line, truncate};
use crate::ui::primitives::Icon;
use crate::ui::theme;

/// `<icon> <name>  <n> bytes` on the left, the copy button on the right
pub fn render_file_header(view: &FileView<'_>, ui: &UiContext, width: usize) -> String {
    let icon = Icon::for_category(view.category);
    let (button_icon, label) = if view.copied {
        (Icon::Copied, theme::COPIED_LABEL)
    } else {
        (Icon::Copy, theme::COPY_LABEL)
    };
    let button_width = button_icon.render(ui.unicode).width() + 1 + label.width();
    let size = format!("{} bytes", view.bytes);

    let fixed = icon.render(ui.unicode).width() + 1 + 2 + size.width();
    let room = width.saturating_sub(fixed + 2 + button_width);
    let name = truncate(view.name, room, ui.unicode);
    let left_width = fixed + name.width();
    let gap = width.saturating_sub(left_width + button_width).max(2);

    let (name, size, label) = if ui.color {
        (
            format!("{}", name.bold()),
            format!("{}", size.with(theme::colors::DIM)),
            if view.copied {
                format!("{}", label.with(theme::colors::SUCCESS))
            } else {
                label.to_string()
            },
        )
    } else {
        (name, size, label.to_string())
    };

    format!(
        "{} {}  {}{}{} {}",
        icon.colored(ui.color, ui.unicode),
        name,
        size,
        " ".repeat(gap),
        button_icon.colored(ui.color, ui.unicode),
        label
    )
}

/// Content lines `[scroll, scroll + height)`, clipped to `width`
pub fn render_content(
    content: &str,
    scroll: usize,
    height: usize,
    width: usize,
    unicode: bool,
) -> Vec<String> {
    content
        .lines()
        .skip(scroll)
        .take(height)
        .map(|line| truncate(&sanitize_line(line), width, unicode))
        .collect()
}

/// Centered title and hint shown when nothing is selected
pub fn render_placeholder(ui: &UiContext, width: usize, height: usize) -> Vec<String> {
    let title = truncate(PLACEHOLDER_TITLE, width, ui.unicode);
    let hint = truncate(PLACEHOLDER_HINT, width, ui.unicode);
    let center = |s: &str| format!("{}{}", " ".repeat(width.saturating_sub(s.width()) / 2), s);

    let mut lines = vec![String::new(); height.saturating_sub(3) / 2];
    let title = center(&title);
    lines.push(if ui.color {
        format!("{}", title.bold())
    } else {
        title
    });
    lines.push(String::new());
    let hint = center(&hint);
    lines.push(if ui.color {
        format!("{}", hint.with(theme::colors::DIM))
    } else {
        hint
    });
    lines.truncate(height);
    lines
}
