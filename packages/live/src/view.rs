use crate::artifact::ArtifactFilter;
use crate::tree::{descendants, LiveTree};
use crate::walker::TextWalker;
use inkbridge_common::{is_sentinel_char, BridgeConfig, NodeId};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A caret location in the live tree.
///
/// For a text node `offset` is a char index into its content; for an
/// element it is a child index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position<N> {
    pub node: N,
    pub offset: usize,
}

impl<N> Position<N> {
    pub fn new(node: N, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// A settled live tree read through a bridge configuration.
///
/// All coordinate mapping (offsets in `offset.rs`, paths in `path.rs`)
/// hangs off this type. It never mutates the tree.
pub struct LiveView<'t, T: LiveTree> {
    pub(crate) tree: &'t T,
    pub(crate) config: Cow<'t, BridgeConfig>,
    pub(crate) filter: ArtifactFilter,
}

impl<'t, T: LiveTree> LiveView<'t, T> {
    /// View with the default configuration
    pub fn new(tree: &'t T) -> Self {
        Self::from_cow(tree, Cow::Owned(BridgeConfig::default()))
    }

    pub fn with_config(tree: &'t T, config: &'t BridgeConfig) -> Self {
        Self::from_cow(tree, Cow::Borrowed(config))
    }

    fn from_cow(tree: &'t T, config: Cow<'t, BridgeConfig>) -> Self {
        let filter = ArtifactFilter::new(config.artifact_policy);
        Self {
            tree,
            config,
            filter,
        }
    }

    pub fn tree(&self) -> &'t T {
        self.tree
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn filter(&self) -> ArtifactFilter {
        self.filter
    }

    pub fn is_artifact(&self, node: T::Node) -> bool {
        self.filter.is_artifact(self.tree, node)
    }

    pub fn text_walker(&self, root: T::Node) -> TextWalker<'t, T> {
        TextWalker::new(self.tree, root, self.filter)
    }

    /// Raw identifier attribute of an element
    pub fn node_id_of(&self, node: T::Node) -> Option<&'t str> {
        self.tree.attribute(node, &self.config.node_id_attribute)
    }

    pub fn is_editable_root(&self, node: T::Node) -> bool {
        self.tree
            .attribute(node, &self.config.boundary_attribute)
            .is_some()
    }

    /// Whether `node` is an element rendered as a block container
    pub fn is_block(&self, node: T::Node) -> bool {
        self.tree
            .tag_name(node)
            .is_some_and(|tag| self.config.is_block_tag(tag))
    }

    /// Closest ancestor-or-self carrying the editable-root marker
    pub fn editable_root(&self, node: T::Node) -> Option<T::Node> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.tree.is_element(n) && self.is_editable_root(n) {
                return Some(n);
            }
            current = self.tree.parent(n);
        }
        None
    }

    /// First element under `root` (inclusive, document order) whose
    /// identifier matches `node_id` with either separator
    pub fn find_by_node_id(&self, root: T::Node, node_id: &str) -> Option<T::Node> {
        let wanted = NodeId::from(node_id);
        descendants(self.tree, root).find(|&n| {
            self.tree.is_element(n) && self.node_id_of(n).is_some_and(|id| wanted.matches(id))
        })
    }

    /// Visible text of a subtree: artifacts and sentinels removed
    pub fn text_content(&self, root: T::Node) -> String {
        let mut out = String::new();
        for node in self.text_walker(root) {
            if let Some(text) = self.tree.text(node) {
                out.extend(text.chars().filter(|c| !is_sentinel_char(*c)));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{LiveDocument, LiveNode};

    #[test]
    fn test_find_by_node_id_accepts_either_separator() {
        let (doc, root) = LiveDocument::from_node(
            &LiveNode::element("div").editable_root().with_child(
                LiveNode::element("p")
                    .with_node_id("0-1")
                    .with_child(LiveNode::text("x")),
            ),
        );
        let view = LiveView::new(&doc);
        let found = view.find_by_node_id(root, "0.1").unwrap();
        assert_eq!(doc.tag_name(found), Some("p"));
        assert!(view.find_by_node_id(root, "0.2").is_none());
        assert_eq!(view.editable_root(found), Some(root));
    }

    #[test]
    fn test_text_content_strips_sentinels_and_artifacts() {
        let (doc, root) = LiveDocument::from_node(
            &LiveNode::element("p")
                .with_child(LiveNode::text("a"))
                .with_child(LiveNode::element("span").with_child(LiveNode::text("\u{200B}")))
                .with_child(LiveNode::text(""))
                .with_child(LiveNode::text("b")),
        );
        assert_eq!(LiveView::new(&doc).text_content(root), "ab");
    }

    #[test]
    fn test_custom_attribute_names() {
        let config = BridgeConfig {
            node_id_attribute: "data-slate-id".to_string(),
            ..BridgeConfig::default()
        };
        let (doc, root) = LiveDocument::from_node(
            &LiveNode::element("p").with_attr("data-slate-id", "3"),
        );
        let view = LiveView::with_config(&doc, &config);
        assert_eq!(view.node_id_of(root), Some("3"));
        assert!(view.is_block(root));
    }
}
