//! Materialize a tree as directories and empty files.

use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use treeform_core::{NodeId, NodeKind, Tree, TreeError};

/// Summary of a completed write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteReport {
    /// Directories ensured, the destination itself included.
    pub dirs: usize,
    /// Empty files ensured.
    pub files: usize,
}

impl WriteReport {
    /// Total number of entries ensured.
    pub fn total(&self) -> usize {
        self.dirs + self.files
    }
}

/// Write the whole tree under `dest`.
///
/// The root maps to `dest` itself. See [`write_node`].
pub fn write(dest: impl AsRef<Path>, tree: &Tree) -> Result<WriteReport, TreeError> {
    write_node(dest, tree, tree.root())
}

/// Write the subtree rooted at `start`, mapping `start` to `dest`.
///
/// Directories are created with all missing ancestors; files are created
/// empty, existing files are left as they are, so writing the same tree
/// twice changes nothing. The first failure is returned and entries written
/// before it stay on disk.
pub fn write_node(
    dest: impl AsRef<Path>,
    tree: &Tree,
    start: NodeId,
) -> Result<WriteReport, TreeError> {
    let dest = dest.as_ref();
    let mut report = WriteReport::default();

    if tree.node(start).is_file() {
        ensure_file(dest)?;
        report.files += 1;
        return Ok(report);
    }

    let mut queue: VecDeque<(NodeId, PathBuf)> = VecDeque::from([(start, dest.to_path_buf())]);
    while let Some((id, path)) = queue.pop_front() {
        let node = tree.node(id);
        match node.kind() {
            NodeKind::Directory => {
                fs::create_dir_all(&path).map_err(|e| TreeError::io(&path, e))?;
                report.dirs += 1;
                queue.extend(
                    node.children()
                        .iter()
                        .map(|&child| (child, path.join(tree.node(child).name()))),
                );
            }
            NodeKind::File => {
                ensure_file(&path)?;
                report.files += 1;
            }
        }
        trace!(path = %path.display(), "ensured entry");
    }

    debug!(
        dest = %dest.display(),
        dirs = report.dirs,
        files = report.files,
        "tree written"
    );
    Ok(report)
}

/// Create an empty file (and its parents) unless it already exists.
fn ensure_file(path: &Path) -> Result<(), TreeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| TreeError::io(parent, e))?;
        }
    }

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map(drop)
        .map_err(|e| TreeError::io(path, e))
}
