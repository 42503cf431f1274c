//! Core types for treeform.
//!
//! This crate provides the in-memory tree shared by the rest of the
//! workspace: nodes, the arena that owns them, locations and the
//! find-or-create locator, plus error and configuration types.

mod config;
mod error;
mod location;
mod node;
mod tree;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::TreeError;
pub use location::Location;
pub use node::{Node, NodeId, NodeKind, SEPARATOR, validate_name};
pub use tree::{Tree, TreeStats};
