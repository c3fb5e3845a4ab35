//! Presentation Layer
//!
//! CLI argument parsing (via clap). Rendering lives with the binary in
//! `ui`, command handlers in `commands`.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
