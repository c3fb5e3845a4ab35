//! Domain Layer
//!
//! The archive tree and the pure functions over it, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - the `Node` tree
//! - `value_objects/` - small immutable types (`Category`)
//! - `services/` - pure lookups over the tree
//! - `ports/` - interfaces for the clipboard and the selection host
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the terminal or the file system
//! 2. **Total** - Tree queries return `Option`, never panic
//! 3. **Ports & Adapters** - Side effects go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
