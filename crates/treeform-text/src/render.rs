//! `tree -aF` style rendering.

use tracing::trace;

use treeform_core::{NodeId, Tree};

/// Connector for every child but the last.
pub const BRANCH: &str = "├── ";
/// Connector for the last child of a directory.
pub const LAST_BRANCH: &str = "└── ";
/// Indentation below a last child, no vertical bar needed.
pub const BLANK: &str = "    ";
/// Vertical bar continuing a non-last sibling's column.
pub const VERTICAL: char = '│';
/// Non-breaking space, as emitted by `tree -aF`.
pub const NBSP: &str = "\u{00A0}";

/// Render the whole tree.
///
/// `nbs` fills the two cells following a vertical bar; use `" "` for plain
/// text or [`NBSP`] to match `tree -aF` byte-for-byte. The root line is
/// omitted for headless trees.
pub fn dumps(tree: &Tree, nbs: &str) -> String {
    let root_line = (!tree.is_headless()).then(|| tree.node(tree.root()).display_name());
    render(tree, tree.root(), nbs, root_line)
}

/// Render the subtree rooted at `id`, whose own line becomes the root line.
///
/// A file node has no subtree and renders as a single last-child entry,
/// which parses back as a headless tree holding that file.
pub fn dumps_node(tree: &Tree, id: NodeId, nbs: &str) -> String {
    let node = tree.node(id);
    if node.is_file() {
        return format!("{LAST_BRANCH}{}\n", node.display_name());
    }
    render(tree, id, nbs, Some(node.display_name()))
}

pub(crate) fn render(
    tree: &Tree,
    start: NodeId,
    nbs: &str,
    root_line: Option<String>,
) -> String {
    let mut out = String::new();
    if let Some(line) = root_line {
        out.push_str(&line);
        out.push('\n');
    }

    let continuation = format!("{VERTICAL}{nbs}{nbs} ");
    let mut stack: Vec<(NodeId, String, bool)> = Vec::new();
    push_children(&mut stack, tree, start, String::new());

    while let Some((id, indent, is_last)) = stack.pop() {
        let node = tree.node(id);
        out.push_str(&indent);
        out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        out.push_str(node.name());
        out.push_str(node.kind().suffix());
        out.push('\n');

        if node.child_count() > 0 {
            let pad = if is_last { BLANK } else { continuation.as_str() };
            push_children(&mut stack, tree, id, format!("{indent}{pad}"));
        }
    }

    trace!(bytes = out.len(), "rendered tree");
    out
}

/// Push children in reverse so they pop in stored order.
fn push_children(
    stack: &mut Vec<(NodeId, String, bool)>,
    tree: &Tree,
    parent: NodeId,
    indent: String,
) {
    let children = tree.node(parent).children();
    for (i, &child) in children.iter().enumerate().rev() {
        let is_last = i + 1 == children.len();
        stack.push((child, indent.clone(), is_last));
    }
}
