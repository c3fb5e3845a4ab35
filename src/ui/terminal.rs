//! What the attached terminal can show
//!
//! The browser asks two questions: should `--color auto` emit color, and
//! can the locale draw the Unicode icon set. Layout size is read live in
//! the event loop, not here.

use is_terminal::IsTerminal;

/// Variables set by common CI runners
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_HOME",
];

/// Checked in order; the first non-empty one names the locale
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Color is on for `auto`: stdout is a tty, not `TERM=dumb`, no
    /// `NO_COLOR`, not in CI
    pub auto_color: bool,
    /// Unicode icons render correctly
    pub unicode: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    pub(crate) fn from_env(env: impl Fn(&str) -> Option<String>, stdout_is_tty: bool) -> Self {
        let dumb = env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let in_ci = CI_VARS.iter().any(|key| env(key).is_some());

        let locale = LOCALE_VARS
            .iter()
            .find_map(|key| env(key).filter(|value| !value.is_empty()));
        // No locale at all is treated as UTF-8.
        let utf8_locale = locale.map_or(true, |locale| {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf-8") || locale.contains("utf8")
        });

        Self {
            auto_color: stdout_is_tty && !dumb && env("NO_COLOR").is_none() && !in_ci,
            unicode: !dumb && utf8_locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(vars: &[(&str, &str)], tty: bool) -> TerminalCapabilities {
        TerminalCapabilities::from_env(
            |key| {
                vars.iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v.to_string())
            },
            tty,
        )
    }

    #[test]
    fn interactive_utf8_terminal_gets_everything() {
        let caps = detect(&[("TERM", "xterm-256color"), ("LANG", "en_US.UTF-8")], true);
        assert!(caps.auto_color);
        assert!(caps.unicode);
    }

    #[test]
    fn piped_output_has_no_auto_color() {
        let caps = detect(&[("TERM", "xterm-256color")], false);
        assert!(!caps.auto_color);
        assert!(caps.unicode);
    }

    #[test]
    fn no_color_and_ci_turn_auto_color_off() {
        assert!(!detect(&[("NO_COLOR", "")], true).auto_color);
        assert!(!detect(&[("GITHUB_ACTIONS", "true")], true).auto_color);
    }

    #[test]
    fn dumb_terminal_is_plain() {
        let caps = detect(&[("TERM", "DUMB"), ("LANG", "en_US.UTF-8")], true);
        assert_eq!(
            caps,
            TerminalCapabilities {
                auto_color: false,
                unicode: false
            }
        );
    }

    #[test]
    fn first_non_empty_locale_decides() {
        assert!(!detect(&[("LC_ALL", ""), ("LC_CTYPE", "C"), ("LANG", "en_US.UTF-8")], true).unicode);
        assert!(detect(&[("LC_ALL", "de_DE.utf8"), ("LANG", "C")], true).unicode);
    }
}
