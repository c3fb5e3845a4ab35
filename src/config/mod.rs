//! Configuration module for Eastward
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (EASTWARD_*)
//! 3. Config file (`--config`, or `<config_dir>/eastward/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{default_config_path, ConfigWarning};
pub use types::{BrowserConfig, ColorMode, Config, LoggingConfig, OutputConfig};
