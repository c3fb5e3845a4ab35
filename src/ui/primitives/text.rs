use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns used by tab stops in the detail pane
pub const TAB_WIDTH: usize = 4;

/// Display width, ignoring ANSI escape sequences
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip ANSI escape sequence: ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}

/// Cut plain text to at most `max` columns, marking the cut with an
/// ellipsis when one fits.
pub fn truncate(s: &str, max: usize, unicode: bool) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let ellipsis = if unicode { "…" } else { "~" };
    let budget = max.saturating_sub(ellipsis.width());

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max >= ellipsis.width() {
        out.push_str(ellipsis);
    }
    out
}

/// Right-pad (possibly colored) text with spaces to `width` columns
pub fn pad(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - w))
}

/// Replace tabs with spaces up to the next tab stop and drop other
/// control characters that would move the terminal cursor.
pub fn sanitize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0;
    for c in line.chars() {
        match c {
            '\t' => {
                let n = TAB_WIDTH - col % TAB_WIDTH;
                out.push_str(&" ".repeat(n));
                col += n;
            }
            c if c.is_control() => {}
            c => {
                out.push(c);
                col += c.width().unwrap_or(0);
            }
        }
    }
    out
}
