use std::time::Instant;

use anyhow::Result;

use eastward::application::{ContentPresenter, CopyOutcome};
use eastward::domain::services::resolve_file;
use eastward::infrastructure::{archive, Osc52Clipboard};

pub fn cmd_copy(path: &str) -> Result<()> {
    let root = archive::canonical();
    let file = resolve_file(root, path)?;

    let mut presenter = ContentPresenter::new(Osc52Clipboard::stdout());
    match presenter.copy(Some(file), Instant::now())? {
        CopyOutcome::Copied { bytes } => println!("Copied {} bytes from {}", bytes, file.name()),
        CopyOutcome::NoContent | CopyOutcome::NothingSelected => {
            println!("Nothing to copy: {} is empty", file.name())
        }
    }
    Ok(())
}
