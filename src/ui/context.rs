use crate::ui::terminal::TerminalCapabilities;
use eastward::config::{ColorMode, Config};
use eastward::presentation::ColorWhen;

/// Narrowest sidebar that still fits an icon and a few characters
const MIN_SIDEBAR_WIDTH: u16 = 12;

/// Deeper indents push file names out of the sidebar
const MAX_INDENT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub sidebar_width: u16,
    pub indent: usize,
    pub compact_width: u16,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>, cli_ascii: bool, config: &Config) -> Self {
        let caps = TerminalCapabilities::detect();
        Self::from_caps(cli_color, cli_ascii, config, caps)
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        cli_ascii: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = !cli_ascii && config.output.unicode && caps.unicode;

        let color = match cli_color.map(ColorMode::from).unwrap_or(config.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.auto_color,
        };

        Self {
            color,
            unicode,
            sidebar_width: config.browser.sidebar_width.max(MIN_SIDEBAR_WIDTH),
            indent: config.browser.indent.min(MAX_INDENT),
            compact_width: config.browser.compact_width,
        }
    }

    /// No color, ASCII icons, default layout
    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        let caps = TerminalCapabilities {
            auto_color: false,
            unicode: false,
        };
        Self::from_caps(Some(ColorWhen::Never), true, &Config::default(), caps)
    }

    /// Narrow terminals hide the sidebar after a file is opened
    pub fn is_compact(&self, width: u16) -> bool {
        width < self.compact_width
    }
}
