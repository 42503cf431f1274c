//! Tree container, locator and statistics.

use std::collections::VecDeque;
use std::path::PathBuf;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::location::Location;
use crate::node::{Node, NodeId, NodeKind, SEPARATOR};

/// Summary statistics for a tree.
///
/// The root itself is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of files.
    pub total_files: u64,
    /// Total number of directories.
    pub total_dirs: u64,
    /// Maximum depth reached (root children are at depth 1).
    pub max_depth: u32,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node at the given depth.
    pub fn record(&mut self, kind: NodeKind, depth: u32) {
        match kind {
            NodeKind::Directory => self.total_dirs += 1,
            NodeKind::File => self.total_files += 1,
        }
        self.max_depth = self.max_depth.max(depth);
    }

    /// Total number of nodes below the root.
    pub fn total_nodes(&self) -> u64 {
        self.total_files + self.total_dirs
    }
}

/// An arena-backed tree of [`Node`]s with a single directory root.
///
/// All nodes are owned by the arena; nodes are never removed, a tree is
/// dropped as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tree {
    nodes: Vec<Node>,
    /// Whether renderers emit the root's own line.
    headless: bool,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree holding only a root with the empty name.
    pub fn new() -> Self {
        Self::with_root("")
    }

    /// Create a tree whose root carries `name` (trailing `/` stripped).
    pub fn with_root(name: &str) -> Self {
        let name = name.trim_end_matches(SEPARATOR);
        Self {
            nodes: vec![Node::root(name)],
            headless: false,
        }
    }

    /// Build a tree out of plain slash separated paths, one per line.
    ///
    /// Blank lines and lines starting with `#` are skipped; a trailing `/`
    /// marks a directory.
    pub fn from_paths<I, S>(lines: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            tree.find_or_create(line)?;
        }
        Ok(tree)
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Whether the root line is hidden when rendering.
    pub fn is_headless(&self) -> bool {
        self.headless
    }

    /// Hide or show the root line when rendering.
    pub fn set_headless(&mut self, headless: bool) {
        self.headless = headless;
    }

    /// Rename the root (trailing `/` stripped, no validation).
    pub fn set_root_name(&mut self, name: &str) {
        let name = name.trim_end_matches(SEPARATOR);
        self.nodes[0].name = CompactString::new(name);
    }

    /// Get a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get a node by id, `None` if the id is out of range.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root, so it is never empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append `node` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, mut node: Node) -> Result<NodeId, TreeError> {
        let parent_node = self.node(parent);
        if parent_node.is_file() {
            return Err(TreeError::InvalidInsertion {
                parent: self.display_path(parent),
                name: node.name.to_string(),
            });
        }
        if self.child(parent, &node.name).is_some() {
            return Err(TreeError::DuplicateName {
                parent: self.display_path(parent),
                name: node.name.to_string(),
            });
        }

        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    /// Find the direct child of `parent` called `name`.
    pub fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).name == name)
    }

    /// Names from the root (inclusive) down to `id`.
    pub fn xpath(&self, id: NodeId) -> Vec<&str> {
        let mut result = Vec::new();
        let mut cur = Some(id);
        while let Some(node_id) = cur {
            let node = self.node(node_id);
            result.push(node.name());
            cur = node.parent;
        }
        result.reverse();
        result
    }

    /// Filesystem path made by joining the node's xpath.
    pub fn path(&self, id: NodeId) -> PathBuf {
        self.xpath(id).into_iter().collect()
    }

    /// Path relative to the root, root name excluded.
    pub fn relative_path(&self, id: NodeId) -> PathBuf {
        self.xpath(id).into_iter().skip(1).collect()
    }

    /// Depth of `id` below the root (the root is at depth 0).
    pub fn depth(&self, id: NodeId) -> u32 {
        let mut depth = 0;
        let mut cur = self.node(id).parent;
        while let Some(parent) = cur {
            depth += 1;
            cur = self.node(parent).parent;
        }
        depth
    }

    /// Whether `id` is the last child of its parent.
    pub fn is_last_child(&self, id: NodeId) -> bool {
        match self.node(id).parent {
            Some(parent) => self.node(parent).children.last() == Some(&id),
            None => true,
        }
    }

    /// Look up a location without modifying the tree.
    ///
    /// Returns `Ok(None)` when any segment is missing.
    pub fn find<L>(&self, location: L) -> Result<Option<NodeId>, TreeError>
    where
        L: TryInto<Location, Error = TreeError>,
    {
        let location = location.try_into()?;
        let mut cur = self.root();
        for segment in location.segments() {
            match self.child(cur, segment) {
                Some(child) => cur = child,
                None => return Ok(None),
            }
        }
        Ok(Some(cur))
    }

    /// Look up a location, creating every missing segment.
    ///
    /// Missing intermediate segments become directories; the last one gets
    /// the kind requested by the location. Inserting below a file fails with
    /// [`TreeError::InvalidInsertion`].
    pub fn find_or_create<L>(&mut self, location: L) -> Result<NodeId, TreeError>
    where
        L: TryInto<Location, Error = TreeError>,
    {
        let location = location.try_into()?;
        let last = location.segments().len().saturating_sub(1);
        let mut cur = self.root();

        for (i, segment) in location.segments().iter().enumerate() {
            cur = match self.child(cur, segment) {
                Some(child) => child,
                None => {
                    let kind = if i == last {
                        location.kind()
                    } else {
                        NodeKind::Directory
                    };
                    self.append(cur, Node::detached(segment.clone(), kind))?
                }
            };
        }
        Ok(cur)
    }

    /// Find a location, optionally creating it.
    pub fn locate<L>(&mut self, location: L, create: bool) -> Result<Option<NodeId>, TreeError>
    where
        L: TryInto<Location, Error = TreeError>,
    {
        if create {
            self.find_or_create(location).map(Some)
        } else {
            self.find(location)
        }
    }

    /// Node ids in level order, starting at `start`.
    pub fn bfs(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            order.push(id);
            queue.extend(self.node(id).children.iter().copied());
        }
        order
    }

    /// Node ids in pre-order (parent first, children in stored order).
    pub fn preorder(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        order
    }

    /// Compute statistics for the whole tree.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::new();
        let mut queue = VecDeque::from([(self.root(), 0u32)]);
        while let Some((id, depth)) = queue.pop_front() {
            let node = self.node(id);
            if depth > 0 {
                stats.record(node.kind, depth);
            }
            queue.extend(node.children.iter().map(|&child| (child, depth + 1)));
        }
        stats
    }

    /// Slash separated path used in error messages.
    fn display_path(&self, id: NodeId) -> String {
        let path = self.xpath(id).join("/");
        if path.is_empty() { "/".to_string() } else { path }
    }
}
