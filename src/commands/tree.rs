use anyhow::Result;

use eastward::infrastructure::archive;

use crate::ui::context::UiContext;
use crate::ui::views::tree::render_tree_listing;

pub fn cmd_tree(json: bool, ui: &UiContext) -> Result<()> {
    let root = archive::canonical();
    if json {
        println!("{}", serde_json::to_string_pretty(root)?);
        return Ok(());
    }

    print!("{}", render_tree_listing(root, ui));
    Ok(())
}
