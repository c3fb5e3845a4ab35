//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ArchiveResult;

use super::loader::{self, ConfigWarning};

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Interactive browser layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Sidebar width in columns
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,

    /// Columns of indentation per tree level
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Below this terminal width, selecting a file hides the sidebar
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            sidebar_width: default_sidebar_width(),
            indent: default_indent(),
            compact_width: default_compact_width(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `eastward=debug`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; defaults to the user cache directory
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sidebar_width() -> u16 {
    36
}

fn default_indent() -> usize {
    2
}

fn default_compact_width() -> u16 {
    100
}

fn default_log_level() -> String {
    "off".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ArchiveResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ArchiveResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the user config, or defaults, then
    /// apply environment overrides
    pub fn load_or_default(explicit: Option<&Path>) -> ArchiveResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (EASTWARD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
