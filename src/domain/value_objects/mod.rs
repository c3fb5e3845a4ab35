//! Value objects - immutable domain types

mod category;

pub use category::{classify, Category};
