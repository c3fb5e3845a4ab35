use crossterm::style::Stylize;

use eastward::domain::entities::Node;
use eastward::domain::value_objects::{classify, Category};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Folder,
    File,
    Manifesto,
    Discography,
    Readme,
    Expand,
    Collapse,
    Copy,
    Copied,
}

impl Icon {
    /// Icon for a file category
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Manifesto => Icon::Manifesto,
            Category::Discography => Icon::Discography,
            Category::Readme => Icon::Readme,
            Category::Generic => Icon::File,
        }
    }

    /// Folder icon for directories, category icon for files
    pub fn for_node(node: &Node) -> Self {
        if node.is_directory() {
            Icon::Folder
        } else {
            Self::for_category(classify(node.name()))
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Folder) => theme::icons::FOLDER,
            (true, Icon::File) => theme::icons::FILE,
            (true, Icon::Manifesto) => theme::icons::MANIFESTO,
            (true, Icon::Discography) => theme::icons::DISCOGRAPHY,
            (true, Icon::Readme) => theme::icons::README,
            (true, Icon::Expand) => theme::icons::EXPAND,
            (true, Icon::Collapse) => theme::icons::COLLAPSE,
            (true, Icon::Copy) => theme::icons::COPY,
            (true, Icon::Copied) => theme::icons::COPIED,
            (false, Icon::Folder) => theme::icons_ascii::FOLDER,
            (false, Icon::File) => theme::icons_ascii::FILE,
            (false, Icon::Manifesto) => theme::icons_ascii::MANIFESTO,
            (false, Icon::Discography) => theme::icons_ascii::DISCOGRAPHY,
            (false, Icon::Readme) => theme::icons_ascii::README,
            (false, Icon::Expand) => theme::icons_ascii::EXPAND,
            (false, Icon::Collapse) => theme::icons_ascii::COLLAPSE,
            (false, Icon::Copy) => theme::icons_ascii::COPY,
            (false, Icon::Copied) => theme::icons_ascii::COPIED,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Manifesto => theme::colors::MANIFESTO,
            Icon::Discography => theme::colors::DISCOGRAPHY,
            Icon::Readme => theme::colors::README,
            Icon::Folder | Icon::File => theme::colors::ARCHIVE,
            Icon::Expand | Icon::Collapse | Icon::Copy => theme::colors::DIM,
            Icon::Copied => theme::colors::SUCCESS,
        };
        format!("{}", s.with(color))
    }
}
