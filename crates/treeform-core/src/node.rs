//! File and directory node types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// Path separator used by locations and by the diagram format.
pub const SEPARATOR: char = '/';

/// Longest accepted segment, in bytes.
const MAX_NAME_LEN: usize = 255;

/// Index of a node within its [`Tree`](crate::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId from an arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Type of tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Directory, may hold children.
    Directory,
    /// Regular file, always a leaf.
    File,
}

impl NodeKind {
    /// Check if this is a directory.
    pub fn is_dir(self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    /// Check if this is a regular file.
    pub fn is_file(self) -> bool {
        matches!(self, NodeKind::File)
    }

    /// Suffix appended to a name when rendered (`/` for directories).
    pub fn suffix(self) -> &'static str {
        match self {
            NodeKind::Directory => "/",
            NodeKind::File => "",
        }
    }
}

/// A single path segment in the tree.
///
/// The `parent` link is a plain index into the owning arena and carries no
/// ownership; children are owned by the tree through their ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub(crate) name: CompactString,
    pub(crate) kind: NodeKind,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// Create a detached node from a textual name.
    ///
    /// A trailing `/` on `name` forces [`NodeKind::Directory`]; passing
    /// `Some(NodeKind::File)` together with such a name is an error. Without
    /// a trailing `/` and without an explicit kind the node is a file.
    pub fn new(name: &str, kind: Option<NodeKind>) -> Result<Self, TreeError> {
        let (name, kind) = split_kind(name, kind)?;
        validate_name(name)?;
        Ok(Self::detached(name, kind))
    }

    /// Create a new directory node.
    pub fn new_directory(name: &str) -> Result<Self, TreeError> {
        Self::new(name, Some(NodeKind::Directory))
    }

    /// Create a new file node.
    pub fn new_file(name: &str) -> Result<Self, TreeError> {
        Self::new(name, Some(NodeKind::File))
    }

    /// Root nodes skip name validation, the empty name is allowed.
    pub(crate) fn root(name: impl Into<CompactString>) -> Self {
        Self::detached(name, NodeKind::Directory)
    }

    pub(crate) fn detached(name: impl Into<CompactString>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Node name (never carries a trailing `/`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Ordered children ids.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent id, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Name as it appears in a diagram, `/`-suffixed for directories.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.name, self.kind.suffix())
    }
}

/// Strip trailing separators from `name` and resolve the effective kind.
pub(crate) fn split_kind(
    name: &str,
    kind: Option<NodeKind>,
) -> Result<(&str, NodeKind), TreeError> {
    let stripped = name.trim_end_matches(SEPARATOR);
    if stripped.len() == name.len() {
        return Ok((name, kind.unwrap_or(NodeKind::File)));
    }
    match kind {
        Some(NodeKind::File) => Err(TreeError::invalid_name(
            name,
            "a name ending with '/' cannot be a file",
        )),
        _ => Ok((stripped, NodeKind::Directory)),
    }
}

/// Check that `name` is a single, non-empty path segment.
pub fn validate_name(name: &str) -> Result<(), TreeError> {
    if name.is_empty() {
        return Err(TreeError::invalid_name(name, "name cannot be empty"));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(TreeError::invalid_name(
            name,
            format!("name is too long (max {MAX_NAME_LEN} bytes)"),
        ));
    }

    for c in [SEPARATOR, '\0'] {
        if name.contains(c) {
            return Err(TreeError::invalid_name(
                name,
                format!("name cannot contain {c:?}"),
            ));
        }
    }

    if let Some(c) = name.chars().find(|c| c.is_control()) {
        return Err(TreeError::invalid_name(
            name,
            format!("name cannot contain control character {c:?}"),
        ));
    }

    if name.ends_with(char::is_whitespace) {
        return Err(TreeError::invalid_name(
            name,
            "name cannot end with whitespace",
        ));
    }

    if name == "." || name == ".." {
        return Err(TreeError::invalid_name(name, "relative segments are not allowed"));
    }

    Ok(())
}
