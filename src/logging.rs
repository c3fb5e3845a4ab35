//! File logging
//!
//! The browser owns the terminal, so log output never goes to stdout or
//! stderr. Events are written to a file when a filter other than `off`
//! is in effect.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::LoggingConfig;
use crate::error::{ArchiveError, ArchiveResult};

/// Filter directive with precedence: EASTWARD_LOG, `-v` count, config level.
pub fn resolve_filter(env_filter: Option<String>, verbose: u8, config_level: &str) -> String {
    if let Some(filter) = env_filter.filter(|f| !f.trim().is_empty()) {
        return filter;
    }
    match verbose {
        0 => config_level.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Resolve the log file path with precedence: CLI, config (which already
/// carries EASTWARD_LOG_FILE), default under the user cache directory.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> ArchiveResult<PathBuf> {
    if let Some(p) = cli_file.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(p);
    }
    if let Some(p) = config_file.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(p);
    }
    default_log_file_path()
}

fn default_log_file_path() -> ArchiveResult<PathBuf> {
    let cache = dirs::cache_dir().ok_or_else(|| {
        ArchiveError::Logging("could not determine cache directory for log file".to_string())
    })?;
    Ok(cache.join("eastward").join("eastward.log"))
}

/// Initialize the global subscriber.
///
/// Returns the log file path, or `None` when logging is off.
pub fn init_logging(
    config: &LoggingConfig,
    verbose: u8,
    cli_file: Option<PathBuf>,
) -> ArchiveResult<Option<PathBuf>> {
    let directive = resolve_filter(std::env::var("EASTWARD_LOG").ok(), verbose, &config.level);
    if directive.trim() == "off" {
        return Ok(None);
    }

    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| ArchiveError::Logging(format!("invalid filter '{}': {}", directive, e)))?;

    let log_file = resolve_log_file_path(cli_file, config.file.clone())?;
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            ArchiveError::Logging(format!("failed to open {}: {}", log_file.display(), e))
        })?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| ArchiveError::Logging(e.to_string()))?;

    Ok(Some(log_file))
}
