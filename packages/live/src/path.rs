//! # Live Node → Document Path
//!
//! Walks from a live node up to the editable root, collecting the trailing
//! segment of every identifier on the way. Text nodes carry no identifier,
//! so their own segment is derived first:
//!
//! - inside an identified inline element (link, strong, ...) the text's
//!   position among its siblings is used directly;
//! - otherwise it is the document-model child index, rebuilt by counting
//!   siblings: an identified element resets the count to its own trailing
//!   segment + 1, every other sibling adds one. Gaps in identifier numbering
//!   are expected (text siblings are never numbered).
//!
//! ```text
//! <li data-node-id="0.0">""<a data-node-id="0.0.1">"x"</a>""</li>
//!                                                  ^ path [0, 0, 1, 0]
//! ```

use crate::tree::{children, LiveTree};
use crate::view::LiveView;
use inkbridge_common::{last_segment, Path};
use tracing::debug;

impl<'t, T: LiveTree> LiveView<'t, T> {
    /// Document-model path of a live node.
    ///
    /// Returns `None` when no editable root is found above the node or an
    /// identifier on the way is not numeric.
    pub fn get_path(&self, node: T::Node) -> Option<Path> {
        let mut reversed = Vec::new();

        let mut current = if self.tree.is_text(node) {
            let parent = self.tree.parent(node)?;
            let inline_with_id = self.node_id_of(parent).is_some() && !self.is_block(parent);
            let index = if inline_with_id {
                self.position_among_siblings(node)
            } else {
                self.slate_index_among_siblings(node)
            };
            reversed.push(index);
            Some(parent)
        } else {
            Some(node)
        };

        let mut previous_id: Option<&str> = None;
        while let Some(n) = current {
            if self.is_editable_root(n) {
                reversed.reverse();
                return Some(reversed);
            }

            if let Some(id) = self.node_id_of(n) {
                // Nested wrappers repeating one identifier are one logical node
                if previous_id != Some(id) {
                    let Some(segment) = last_segment(id) else {
                        debug!(node_id = id, "Unparseable identifier while resolving path");
                        return None;
                    };
                    reversed.push(segment);
                    previous_id = Some(id);
                }
            }
            current = self.tree.parent(n);
        }

        debug!("No editable root above node, path unresolvable");
        None
    }

    /// Document-model child index of a node, rebuilt from its siblings
    pub fn slate_index_among_siblings(&self, node: T::Node) -> usize {
        let Some(parent) = self.tree.parent(node) else {
            return 0;
        };

        let mut index = 0;
        for sibling in children(self.tree, parent) {
            if sibling == node {
                break;
            }
            if self.is_artifact(sibling) {
                continue;
            }
            match self.node_id_of(sibling).and_then(last_segment) {
                Some(segment) => index = segment + 1,
                None => index += 1,
            }
        }
        index
    }

    /// Text child of `parent` sitting at document-model child `index`.
    ///
    /// Unlike [`find_child_by_slate_index`](Self::find_child_by_slate_index)
    /// this never returns an element: a leaf the renderer emitted as an
    /// artifact (the empty text around an inline) is still returned when no
    /// visible text shares its index.
    pub fn find_text_by_slate_index(&self, parent: T::Node, index: usize) -> Option<T::Node> {
        let mut current = 0;
        let mut artifact = None;
        for child in children(self.tree, parent) {
            let is_artifact = self.is_artifact(child);
            if current == index && self.tree.is_text(child) {
                if !is_artifact {
                    return Some(child);
                }
                artifact.get_or_insert(child);
            }
            if current > index {
                break;
            }
            if is_artifact {
                continue;
            }
            match self.node_id_of(child).and_then(last_segment) {
                Some(segment) => current = segment + 1,
                None => current += 1,
            }
        }
        artifact
    }

    /// Count of non-artifact siblings before `node`
    fn position_among_siblings(&self, node: T::Node) -> usize {
        let Some(parent) = self.tree.parent(node) else {
            return 0;
        };
        children(self.tree, parent)
            .take_while(|&sibling| sibling != node)
            .filter(|&sibling| !self.is_artifact(sibling))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use crate::document::{LiveDocument, LiveNode};
    use crate::tree::{children, LiveTree};
    use crate::view::LiveView;

    fn list_item() -> (LiveDocument, crate::LiveNodeId) {
        LiveDocument::from_node(
            &LiveNode::element("div").editable_root().with_child(
                LiveNode::element("ul").with_node_id("0").with_child(
                    LiveNode::element("li")
                        .with_node_id("0.0")
                        .with_child(LiveNode::text(""))
                        .with_child(
                            LiveNode::element("a")
                                .with_node_id("0.0.1")
                                .with_child(LiveNode::text("x")),
                        )
                        .with_child(LiveNode::text("")),
                ),
            ),
        )
    }

    fn find_text(doc: &LiveDocument, root: crate::LiveNodeId, text: &str) -> crate::LiveNodeId {
        crate::tree::descendants(doc, root)
            .find(|&n| doc.text(n) == Some(text))
            .unwrap()
    }

    #[test]
    fn test_text_lookup_around_inline() {
        let (doc, root) = list_item();
        let view = LiveView::new(&doc);
        let li = view.find_by_node_id(root, "0.0").unwrap();
        let live: Vec<_> = children(&doc, li).collect();

        assert_eq!(view.find_text_by_slate_index(li, 0), Some(live[0]));
        assert_eq!(view.find_text_by_slate_index(li, 1), None);
        assert_eq!(view.find_text_by_slate_index(li, 2), Some(live[2]));
        assert_eq!(view.find_text_by_slate_index(li, 3), None);
    }

    #[test]
    fn test_text_lookup_prefers_visible_leaf() {
        let (doc, root) = LiveDocument::from_node(
            &LiveNode::element("div").editable_root().with_child(
                LiveNode::element("strong")
                    .with_node_id("0")
                    .with_children(vec![LiveNode::text(""), LiveNode::text("content")]),
            ),
        );
        let view = LiveView::new(&doc);
        let strong = view.find_by_node_id(root, "0").unwrap();
        let leaf = view.find_text_by_slate_index(strong, 0).unwrap();
        assert_eq!(doc.text(leaf), Some("content"));
    }

    #[test]
    fn test_link_text_inside_list_item() {
        let (doc, root) = list_item();
        let x = find_text(&doc, root, "x");
        assert_eq!(LiveView::new(&doc).get_path(x), Some(vec![0, 0, 1, 0]));
    }

    #[test]
    fn test_element_path() {
        let (doc, root) = list_item();
        let view = LiveView::new(&doc);
        let link = view.find_by_node_id(root, "0.0.1").unwrap();
        assert_eq!(view.get_path(link), Some(vec![0, 0, 1]));
        assert_eq!(view.get_path(root), Some(vec![]));
    }

    #[test]
    fn test_text_after_inline_counts_from_identifier() {
        let (doc, root) = LiveDocument::from_node(
            &LiveNode::element("div").editable_root().with_child(
                LiveNode::element("p")
                    .with_node_id("0")
                    .with_child(LiveNode::text("Hello "))
                    .with_child(
                        LiveNode::element("strong")
                            .with_node_id("0.1")
                            .with_child(LiveNode::text("world")),
                    )
                    .with_child(LiveNode::text(" after")),
            ),
        );
        let view = LiveView::new(&doc);
        assert_eq!(view.get_path(find_text(&doc, root, "Hello ")), Some(vec![0, 0]));
        assert_eq!(view.get_path(find_text(&doc, root, "world")), Some(vec![0, 1, 0]));
        assert_eq!(view.get_path(find_text(&doc, root, " after")), Some(vec![0, 2]));
    }

    #[test]
    fn test_unidentified_wrapper_inside_inline() {
        let (doc, root) = LiveDocument::from_node(
            &LiveNode::element("div").editable_root().with_child(
                LiveNode::element("p")
                    .with_node_id("3")
                    .with_child(LiveNode::text("a"))
                    .with_child(
                        LiveNode::element("strong")
                            .with_node_id("3-1")
                            .with_child(LiveNode::element("em").with_child(LiveNode::text("b"))),
                    ),
            ),
        );
        let view = LiveView::new(&doc);
        assert_eq!(view.get_path(find_text(&doc, root, "b")), Some(vec![3, 1, 0]));
    }

    #[test]
    fn test_duplicate_nested_wrappers_count_once() {
        let (doc, root) = LiveDocument::from_node(
            &LiveNode::element("div").editable_root().with_child(
                LiveNode::element("p").with_node_id("0").with_child(
                    LiveNode::element("span").with_node_id("0.0").with_child(
                        LiveNode::element("span")
                            .with_node_id("0.0")
                            .with_child(LiveNode::text("t")),
                    ),
                ),
            ),
        );
        assert_eq!(
            LiveView::new(&doc).get_path(find_text(&doc, root, "t")),
            Some(vec![0, 0, 0])
        );
    }

    #[test]
    fn test_pretty_printing_does_not_shift_index() {
        let (doc, root) = LiveDocument::from_node(
            &LiveNode::element("div").editable_root().with_child(
                LiveNode::element("p")
                    .with_node_id("0")
                    .with_child(LiveNode::text("\n    "))
                    .with_child(
                        LiveNode::element("strong")
                            .with_node_id("0.0")
                            .with_child(LiveNode::text("bold")),
                    )
                    .with_child(LiveNode::text("tail")),
            ),
        );
        let view = LiveView::new(&doc);
        let p = children(&doc, root).next().unwrap();
        let tail = find_text(&doc, root, "tail");
        assert_eq!(view.slate_index_among_siblings(tail), 1);
        assert_eq!(view.get_path(tail), Some(vec![0, 1]));
        assert_eq!(view.find_child_by_slate_index(p, 1), Some(tail));
    }

    #[test]
    fn test_missing_boundary_is_none() {
        let (doc, p) = LiveDocument::from_node(
            &LiveNode::element("p")
                .with_node_id("0")
                .with_child(LiveNode::text("x")),
        );
        let x = doc.first_child(p).unwrap();
        assert_eq!(LiveView::new(&doc).get_path(x), None);
    }

    #[test]
    fn test_garbage_identifier_is_none() {
        let (doc, root) = LiveDocument::from_node(
            &LiveNode::element("div").editable_root().with_child(
                LiveNode::element("p")
                    .with_node_id("intro")
                    .with_child(LiveNode::text("x")),
            ),
        );
        let x = find_text(&doc, root, "x");
        assert_eq!(LiveView::new(&doc).get_path(x), None);
    }
}
