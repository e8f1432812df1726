//! Artifact classification
//!
//! Renderers inject text the document model never had: empty text nodes and
//! pretty-printing whitespace between tags. Those are artifacts and are
//! skipped by every offset and index computation. Sentinel text (a lone
//! zero-width character) is never an artifact.

use crate::tree::LiveTree;
use inkbridge_common::{is_sentinel_text, visible_len, ArtifactPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArtifactFilter {
    policy: ArtifactPolicy,
}

impl ArtifactFilter {
    pub fn new(policy: ArtifactPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ArtifactPolicy {
        self.policy
    }

    /// True for text nodes with no document-model counterpart.
    ///
    /// Elements are never artifacts.
    pub fn is_artifact<T: LiveTree>(&self, tree: &T, node: T::Node) -> bool {
        let Some(text) = tree.text(node) else {
            return false;
        };
        if text.is_empty() {
            return true;
        }
        if is_sentinel_text(text) || !text.chars().all(char::is_whitespace) {
            return false;
        }

        match self.policy {
            ArtifactPolicy::EmptyOnly => false,
            ArtifactPolicy::AllWhitespace => true,
            ArtifactPolicy::FormattingWhitespace => {
                text.contains(['\n', '\r']) && between_element_boundaries(tree, node)
            }
        }
    }

    /// Visible characters a text node contributes; zero for artifacts,
    /// sentinels and elements
    pub fn length_of<T: LiveTree>(&self, tree: &T, node: T::Node) -> usize {
        match tree.text(node) {
            Some(text) if !self.is_artifact(tree, node) => visible_len(text),
            _ => 0,
        }
    }
}

/// Neighbours on both sides are elements or absent
fn between_element_boundaries<T: LiveTree>(tree: &T, node: T::Node) -> bool {
    let prev_ok = tree
        .previous_sibling(node)
        .map_or(true, |n| tree.is_element(n));
    let next_ok = tree.next_sibling(node).map_or(true, |n| tree.is_element(n));
    prev_ok && next_ok
}

/// Classify with the default policy
pub fn is_artifact<T: LiveTree>(tree: &T, node: T::Node) -> bool {
    ArtifactFilter::default().is_artifact(tree, node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{LiveDocument, LiveNode};
    use crate::tree::children;

    fn kids(node: LiveNode) -> (LiveDocument, Vec<crate::LiveNodeId>) {
        let (doc, root) = LiveDocument::from_node(&node);
        let kids = children(&doc, root).collect();
        (doc, kids)
    }

    #[test]
    fn test_empty_text_is_always_artifact() {
        let (doc, kids) = kids(LiveNode::element("strong").with_child(LiveNode::text("")));
        for policy in [
            ArtifactPolicy::EmptyOnly,
            ArtifactPolicy::FormattingWhitespace,
            ArtifactPolicy::AllWhitespace,
        ] {
            assert!(ArtifactFilter::new(policy).is_artifact(&doc, kids[0]));
        }
    }

    #[test]
    fn test_sentinel_is_never_artifact() {
        let (doc, kids) = kids(LiveNode::element("a").with_child(LiveNode::text("\u{FEFF}")));
        let filter = ArtifactFilter::new(ArtifactPolicy::AllWhitespace);
        assert!(!filter.is_artifact(&doc, kids[0]));
        assert_eq!(filter.length_of(&doc, kids[0]), 0);
    }

    #[test]
    fn test_pretty_printing_between_tags() {
        let (doc, kids) = kids(
            LiveNode::element("ul")
                .with_child(LiveNode::text("\n  "))
                .with_child(LiveNode::element("li"))
                .with_child(LiveNode::text("\n")),
        );
        assert!(is_artifact(&doc, kids[0]));
        assert!(is_artifact(&doc, kids[2]));
        assert!(!ArtifactFilter::new(ArtifactPolicy::EmptyOnly).is_artifact(&doc, kids[0]));
    }

    #[test]
    fn test_space_between_words_is_content() {
        let (doc, kids) = kids(
            LiveNode::element("p")
                .with_child(LiveNode::element("strong").with_child(LiveNode::text("a")))
                .with_child(LiveNode::text(" "))
                .with_child(LiveNode::element("em").with_child(LiveNode::text("b"))),
        );
        assert!(!is_artifact(&doc, kids[1]));
        assert!(ArtifactFilter::new(ArtifactPolicy::AllWhitespace).is_artifact(&doc, kids[1]));
    }

    #[test]
    fn test_newline_next_to_text_is_content() {
        let (doc, kids) = kids(
            LiveNode::element("pre")
                .with_child(LiveNode::text("line"))
                .with_child(LiveNode::text("\n")),
        );
        assert!(!is_artifact(&doc, kids[1]));
        assert_eq!(ArtifactFilter::default().length_of(&doc, kids[1]), 1);
    }

    #[test]
    fn test_elements_are_not_artifacts() {
        let (doc, root) = LiveDocument::from_node(&LiveNode::element("span"));
        assert!(!is_artifact(&doc, root));
    }
}
