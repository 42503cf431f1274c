//! Error types for tree operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, querying, parsing or writing a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Root path is not a directory.
    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A child was about to be inserted under a file node.
    #[error("Cannot insert '{name}' under file '{parent}'")]
    InvalidInsertion { parent: String, name: String },

    /// A node name is not a single valid path segment.
    #[error("Invalid node name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A sibling with the same name already exists.
    #[error("'{parent}' already contains '{name}'")]
    DuplicateName { parent: String, name: String },

    /// Diagram text whose indentation cannot be mapped onto a tree.
    #[error("Malformed tree text at line {line}: {message}")]
    MalformedTreeText { line: usize, message: String },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid name error.
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed text error for a 1-based line number.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedTreeText {
            line,
            message: message.into(),
        }
    }
}
