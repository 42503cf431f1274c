//! `tree -aF` style parsing.

use std::cmp::Ordering;

use tracing::{debug, trace};

use treeform_core::{Tree, TreeError};

/// Token every entry line carries: the end of a connector.
pub const CONNECTOR_TOKEN: &str = "─ ";

/// Display columns used by one nesting level.
const LEVEL_WIDTH: usize = 4;

/// Rebuild a tree from diagram text.
///
/// The first non-blank line without a connector, when it comes before any
/// entry, is the root line and names the root; text without it yields a
/// headless tree so that rendering reproduces the input. Other lines
/// without a connector are ignored.
///
/// Indentation is checked strictly: a line shallower than the first entry,
/// or more than one level deeper than the line before it, fails with
/// [`TreeError::MalformedTreeText`]. So does an entry whose name is already
/// taken by an earlier sibling, whatever the kinds of the two lines.
///
/// Returns `Ok(None)` when the text holds neither a root line nor entries.
pub fn parse(text: &str) -> Result<Option<Tree>, TreeError> {
    let mut tree = Tree::new();
    let mut root_line: Option<&str> = None;
    let mut context: Vec<&str> = Vec::new();
    let mut baseline: Option<usize> = None;
    let mut prev_depth = 0;
    let mut entries = 0usize;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;

        let Some(token_at) = line.find(CONNECTOR_TOKEN) else {
            if baseline.is_none() && root_line.is_none() && !line.trim().is_empty() {
                root_line = Some(line.trim_end());
            } else {
                trace!(line = line_no, "skipping line without connector");
            }
            continue;
        };

        let name_at = token_at + CONNECTOR_TOKEN.len();
        let level = line[..name_at].chars().count() / LEVEL_WIDTH;
        let name = line[name_at..].trim_end();

        let base = *baseline.get_or_insert(level);
        if level < base {
            return Err(TreeError::malformed(
                line_no,
                format!("entry '{name}' is shallower than the first entry"),
            ));
        }
        let depth = level - base + 1;
        if depth > prev_depth + 1 {
            return Err(TreeError::malformed(
                line_no,
                format!("entry '{name}' jumps from depth {prev_depth} to {depth}"),
            ));
        }

        match depth.cmp(&prev_depth) {
            Ordering::Greater => context.push(name),
            Ordering::Equal => {
                if let Some(last) = context.last_mut() {
                    *last = name;
                }
            }
            Ordering::Less => {
                for _ in 0..(prev_depth - depth + 1) {
                    context.pop();
                }
                context.push(name);
            }
        }
        prev_depth = depth;

        let before = tree.len();
        let id = tree.find_or_create(context.as_slice())?;
        if tree.len() == before {
            let existing = tree.node(id).display_name();
            return Err(TreeError::malformed(
                line_no,
                format!("entry '{name}' repeats sibling '{existing}'"),
            ));
        }
        entries += 1;
    }

    if entries == 0 && root_line.is_none() {
        return Ok(None);
    }

    match root_line {
        Some(name) => tree.set_root_name(name),
        None => tree.set_headless(true),
    }
    debug!(entries, headless = tree.is_headless(), "parsed tree text");

    Ok(Some(tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use treeform_core::NodeKind;

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_none());
        assert!(parse("\n   \n\n").unwrap().is_none());
    }

    #[test]
    fn test_root_line_names_root() {
        let tree = parse("project/\n└── a.txt\n").unwrap().unwrap();
        assert_eq!(tree.node(tree.root()).name(), "project");
        assert!(!tree.is_headless());

        let tree = parse("/\n└── a.txt\n").unwrap().unwrap();
        assert_eq!(tree.node(tree.root()).name(), "");
    }

    #[test]
    fn test_levels_and_kinds() {
        let text = "\
└── src/
    ├── a.py
    └── pkg/
        └── b.py
";
        let tree = parse(text).unwrap().unwrap();
        assert!(tree.is_headless());

        let b = tree.find("src/pkg/b.py").unwrap().unwrap();
        assert_eq!(tree.xpath(b), ["", "src", "pkg", "b.py"]);
        assert_eq!(tree.node(b).kind(), NodeKind::File);

        let pkg = tree.find("src/pkg/").unwrap().unwrap();
        assert_eq!(tree.node(pkg).kind(), NodeKind::Directory);
    }

    #[test]
    fn test_ascending_several_levels() {
        let text = "\
├── a/
│   └── b/
│       └── c/
│           └── d
└── e
";
        let tree = parse(text).unwrap().unwrap();
        let root_children: Vec<_> = tree
            .node(tree.root())
            .children()
            .iter()
            .map(|&id| tree.node(id).name().to_string())
            .collect();
        assert_eq!(root_children, ["a", "e"]);
    }

    #[test]
    fn test_rejects_level_jump() {
        let text = "\
└── a/
        └── too-deep
";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, TreeError::MalformedTreeText { line: 2, .. }));
    }

    #[test]
    fn test_rejects_line_above_baseline() {
        let text = "    └── b\n└── a\n";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, TreeError::MalformedTreeText { line: 2, .. }));
    }

    #[test]
    fn test_rejects_children_under_file() {
        let text = "\
└── a.txt
    └── b
";
        assert!(matches!(
            parse(text),
            Err(TreeError::InvalidInsertion { .. })
        ));
    }

    #[test]
    fn test_rejects_conflicting_sibling_kinds() {
        let err = parse("├── a\n└── a/\n").unwrap_err();
        assert!(matches!(err, TreeError::MalformedTreeText { line: 2, .. }));

        let err = parse("/\n├── a/\n│   └── x\n└── a\n").unwrap_err();
        assert!(matches!(err, TreeError::MalformedTreeText { line: 4, .. }));
    }

    #[test]
    fn test_rejects_repeated_sibling() {
        let text = "\
└── src/
    ├── lib.rs
    └── lib.rs
";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, TreeError::MalformedTreeText { line: 3, .. }));

        // same name under different parents is fine
        let text = "\
├── a/
│   └── mod.rs
└── b/
    └── mod.rs
";
        let tree = parse(text).unwrap().unwrap();
        assert_eq!(tree.stats().total_files, 2);
    }

    #[test]
    fn test_skips_noise_lines() {
        let text = "\
/
├── a

└── b/

1 directory, 1 file
";
        let tree = parse(text).unwrap().unwrap();
        let stats = tree.stats();
        assert_eq!(stats.total_files, 1);
        assert_eq!(stats.total_dirs, 1);
    }
}
