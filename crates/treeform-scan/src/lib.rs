//! Directory walking for treeform.
//!
//! This crate turns a real directory into a [`Tree`], using jwalk for
//! traversal.
//!
//! # Example
//!
//! ```rust,no_run
//! use treeform_scan::{ScanConfig, TreeScanner};
//!
//! let tree = treeform_scan::create("/path/to/walk").unwrap();
//! println!("Total files: {}", tree.stats().total_files);
//!
//! let config = ScanConfig::builder()
//!     .root("/path/to/walk")
//!     .ignore_patterns(vec!["target".to_string()])
//!     .build()
//!     .unwrap();
//! let tree = TreeScanner::new().scan(&config).unwrap();
//! # let _ = tree;
//! ```

mod scanner;

pub use scanner::{TreeScanner, create};

// Re-export core types for convenience
pub use treeform_core::{NodeKind, ScanConfig, ScanConfigBuilder, Tree, TreeError, TreeStats};
