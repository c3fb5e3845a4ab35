//! CLI Argument Parsing
//!
//! Global flags (--color, --ascii, --config, --verbose, --log-file) are
//! inherited by all subcommands. Without a subcommand the interactive
//! browser starts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Eastward - explorer for the Eastward Protocol archive
#[derive(Parser, Debug)]
#[command(name = "eastward")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'eastward' without arguments to open the interactive browser.")]
pub struct Cli {
    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Use ASCII icons instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv); only affects the log file
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    Browse,

    /// Print the archive tree
    Tree {
        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a file verbatim
    Show {
        /// Slash-separated archive path, e.g. 00_CANONICAL_CORE/MASTER_MANIFESTO.md
        path: String,

        /// Print the file and its metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy a file's content to the terminal clipboard
    Copy {
        /// Slash-separated archive path
        path: String,
    },
}
