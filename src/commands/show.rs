use std::io::Write;

use anyhow::Result;

use eastward::domain::services::resolve_file;
use eastward::domain::value_objects::classify;
use eastward::infrastructure::archive;

pub fn cmd_show(path: &str, json: bool) -> Result<()> {
    let root = archive::canonical();
    let file = resolve_file(root, path)?;
    let content = file.content().unwrap_or_default();

    if json {
        let output = serde_json::json!({
            "id": file.id(),
            "name": file.name(),
            "path": path,
            "category": classify(file.name()),
            "bytes": file.byte_len(),
            "content": content,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    // Verbatim: no trailing newline is added.
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
