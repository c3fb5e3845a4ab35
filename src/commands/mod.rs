pub mod browse;
pub mod copy;
pub mod show;
pub mod tree;
