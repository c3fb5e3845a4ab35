//! Common test utilities for Eastward contract and CLI tests.
//!
//! - `eastward()`: the binary under test with an isolated environment
//! - Fixtures: small archive trees

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::path::Path;
use std::process::Command;

/// Run the `eastward` binary with HOME and the XDG directories pointed at
/// `home` and every EASTWARD_* variable cleared.
pub fn eastward(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_eastward"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_CACHE_HOME", home.join(".cache"))
        .env("TERM", "xterm-256color")
        .env("LANG", "en_US.UTF-8")
        .env_remove("NO_COLOR");
    for key in [
        "LC_ALL",
        "LC_CTYPE",
        "EASTWARD_COLOR",
        "EASTWARD_UNICODE",
        "EASTWARD_SIDEBAR_WIDTH",
        "EASTWARD_LOG",
        "EASTWARD_LOG_FILE",
    ] {
        cmd.env_remove(key);
    }
    cmd
}
