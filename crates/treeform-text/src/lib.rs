//! Diagram text for treeform trees.
//!
//! Renders trees the way `tree -aF` does and parses that text back:
//!
//! ```text
//! /
//! ├── src/
//! │   └── main.rs
//! └── Cargo.toml
//! ```
//!
//! For any tree, `dumps(parse(dumps(tree)))` equals `dumps(tree)`.
//!
//! # Example
//!
//! ```rust
//! use treeform_core::Tree;
//! use treeform_text::{dumps, parse};
//!
//! let tree = Tree::from_paths(["src/main.rs", "Cargo.toml"]).unwrap();
//! let text = dumps(&tree, " ");
//! let parsed = parse(&text).unwrap().unwrap();
//! assert_eq!(dumps(&parsed, " "), text);
//! ```

mod config;
mod parse;
mod render;

pub use config::{RenderConfig, RenderConfigBuilder};
pub use parse::{CONNECTOR_TOKEN, parse};
pub use render::{BLANK, BRANCH, LAST_BRANCH, NBSP, VERTICAL, dumps, dumps_node};
