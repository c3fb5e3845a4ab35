//! Eastward CLI - explorer for the Eastward Protocol archive
//!
//! Usage: eastward [COMMAND]
//!
//! Commands:
//!   browse  Open the interactive browser (default)
//!   tree    Print the archive tree
//!   show    Print a file verbatim
//!   copy    Copy a file's content to the terminal clipboard

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};

use eastward::config::Config;
use eastward::logging;
use eastward::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    let log_file = logging::init_logging(&config.logging, cli.verbose, cli.log_file.clone())?;
    if let Some(path) = &log_file {
        debug!(path = %path.display(), "logging initialized");
    }
    for warning in &warnings {
        warn!(%warning, "config warning");
        eprintln!("warning: {}", warning);
    }

    let ui = UiContext::new(cli.color, cli.ascii, &config);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => commands::browse::cmd_browse(&ui),
        Commands::Tree { json } => commands::tree::cmd_tree(json, &ui),
        Commands::Show { path, json } => commands::show::cmd_show(&path, json),
        Commands::Copy { path } => commands::copy::cmd_copy(&path),
    }
}
