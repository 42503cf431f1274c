//! JWalk-based directory walker.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, trace};

use treeform_core::{Node, NodeId, NodeKind, ScanConfig, Tree, TreeError};

/// Builds a [`Tree`] out of a real directory.
///
/// Every directory's entries are appended in file name order, so the
/// resulting children order matches a sorted directory listing at every
/// level. Symbolic links are never followed and end up as files.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeScanner;

impl TreeScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Walk the directory described by `config`.
    pub fn scan(&self, config: &ScanConfig) -> Result<Tree, TreeError> {
        let start = Instant::now();

        if !config.root.is_dir() {
            return Err(TreeError::NotADirectory {
                path: config.root.clone(),
            });
        }
        let root_path = config
            .root
            .canonicalize()
            .map_err(|e| TreeError::io(&config.root, e))?;

        let mut tree = Tree::new();
        let mut dirs: HashMap<PathBuf, NodeId> = HashMap::new();
        dirs.insert(root_path.clone(), tree.root());

        for entry_result in self.walker(config, &root_path) {
            let entry = entry_result.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root_path.clone());
                TreeError::io(path, err.into())
            })?;

            let path = entry.path();
            let name = entry.file_name().to_str().ok_or_else(|| {
                TreeError::invalid_name(
                    entry.file_name().to_string_lossy(),
                    "name is not valid UTF-8",
                )
            })?;
            let kind = if entry.file_type().is_dir() {
                NodeKind::Directory
            } else {
                NodeKind::File
            };

            let parent = dirs
                .get(entry.parent_path())
                .copied()
                .ok_or_else(|| TreeError::NotADirectory {
                    path: entry.parent_path().to_path_buf(),
                })?;
            let id = tree.append(parent, Node::new(name, Some(kind))?)?;
            trace!(path = %path.display(), ?kind, "walked entry");

            if kind.is_dir() {
                dirs.insert(path, id);
            }
        }

        let stats = tree.stats();
        debug!(
            root = %root_path.display(),
            files = stats.total_files,
            dirs = stats.total_dirs,
            elapsed = ?start.elapsed(),
            "directory walk complete"
        );

        Ok(tree)
    }

    /// Serial, sorted walker that never descends into ignored entries.
    fn walker(&self, config: &ScanConfig, root_path: &Path) -> WalkDir {
        let filter = config.clone();

        WalkDir::new(root_path)
            .parallelism(Parallelism::Serial)
            .sort(true)
            .skip_hidden(!config.include_hidden)
            .follow_links(false)
            .min_depth(1)
            .max_depth(config.max_depth.map(|d| d as usize).unwrap_or(usize::MAX))
            .process_read_dir(move |_depth, _path, _state, children| {
                children.retain(|child| match child {
                    Ok(entry) => {
                        let name = entry.file_name.to_string_lossy();
                        !filter.should_ignore(&name) && !filter.should_skip_hidden(&name)
                    }
                    Err(_) => true,
                });
            })
    }
}

/// Build a tree out of the directory at `path`.
///
/// Fails with [`TreeError::NotADirectory`] if `path` is not an existing
/// directory.
pub fn create(path: impl AsRef<Path>) -> Result<Tree, TreeError> {
    TreeScanner::new().scan(&ScanConfig::new(path.as_ref()))
}
