//! Domain services - pure functions over the archive tree

mod lookup;

pub use lookup::{initial_file, resolve, resolve_file, resolve_path, split_path, INITIAL_FILE_PATH};
