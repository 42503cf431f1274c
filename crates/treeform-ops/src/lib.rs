//! Filesystem operations for treeform.
//!
//! This crate realizes a [`Tree`](treeform_core::Tree) on disk: every
//! directory node becomes a directory and every file node an empty file.

mod write;

pub use write::{WriteReport, write, write_node};
