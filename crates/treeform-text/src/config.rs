//! Rendering configuration.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use treeform_core::{SEPARATOR, Tree};

use crate::render::{NBSP, render};

/// Options for turning a tree into diagram text.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RenderConfig {
    /// Fill for the two cells after a vertical bar.
    #[builder(default = "\" \".to_string()")]
    #[serde(default = "default_nbs")]
    pub nbs: String,

    /// Text shown instead of the root's name on the root line.
    #[builder(default)]
    #[serde(default)]
    pub root_label: Option<String>,
}

fn default_nbs() -> String {
    " ".to_string()
}

impl RenderConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref nbs) = self.nbs {
            if nbs.chars().count() != 1 {
                return Err(format!(
                    "Continuation token must be a single character, got {nbs:?}"
                ));
            }
        }
        Ok(())
    }
}

impl RenderConfig {
    /// Create a new render config builder.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Config reproducing `tree -aF` output byte-for-byte.
    pub fn tree_compatible() -> Self {
        Self {
            nbs: NBSP.to_string(),
            root_label: None,
        }
    }

    /// Render `tree` with these options.
    pub fn render(&self, tree: &Tree) -> String {
        let root = tree.node(tree.root());
        let root_line = (!tree.is_headless()).then(|| match &self.root_label {
            Some(label) => format!(
                "{}{}",
                label.trim_end_matches(SEPARATOR),
                root.kind().suffix()
            ),
            None => root.display_name(),
        });
        render(tree, tree.root(), &self.nbs, root_line)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            nbs: default_nbs(),
            root_label: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_rejects_wide_token() {
        assert!(RenderConfig::builder().nbs("  ").build().is_err());
        assert!(RenderConfig::builder().nbs("").build().is_err());
        assert!(RenderConfig::builder().nbs(NBSP).build().is_ok());
    }

    #[test]
    fn test_root_label() {
        let tree = Tree::from_paths(["a"]).unwrap();
        let config = RenderConfig::builder()
            .root_label(Some("my-project/".to_string()))
            .build()
            .unwrap();
        assert_eq!(config.render(&tree), "my-project/\n└── a\n");
    }

    #[test]
    fn test_default_matches_dumps() {
        let tree = Tree::from_paths(["x/y", "z"]).unwrap();
        assert_eq!(
            RenderConfig::default().render(&tree),
            crate::dumps(&tree, " ")
        );
    }
}
