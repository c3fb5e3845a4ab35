//! Cosmetic file classification
//!
//! Picks a decorative category from a file name. Carries no structural
//! meaning: directories are never classified by the renderer and nothing
//! in the navigator depends on it.

use serde::Serialize;

/// Decorative category of a file, chosen from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Manifestos and protocols
    Manifesto,
    /// Discographies and album documents
    Discography,
    /// Readme files
    Readme,
    /// Everything else
    #[default]
    Generic,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Manifesto => "manifesto",
            Category::Discography => "discography",
            Category::Readme => "readme",
            Category::Generic => "generic",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a file name by case-sensitive substring match.
///
/// Rules are checked in order; the first match wins.
pub fn classify(name: &str) -> Category {
    if name.contains("MANIFESTO") || name.contains("PROTOCOL") {
        Category::Manifesto
    } else if name.contains("DISCOGRAPHY") || name.contains("ALBUM") {
        Category::Discography
    } else if name.contains("README") {
        Category::Readme
    } else {
        Category::Generic
    }
}
