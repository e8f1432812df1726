//! # Leaf Text Mutation
//!
//! ### UpdateText
//! - Targets an element by node id (either separator accepted)
//! - Replaces the `text` of that element's first text child
//! - Atomic replacement, not a character diff
//! - Unknown id is a no-op
//!
//! An element never gains a `text` property here and never loses its
//! `children`: lists, links and other containers must survive any number of
//! edits without turning into element-with-text nodes.

use crate::model::{DocumentNode, ElementNode};
use tracing::debug;

/// Return a copy of `tree` with the element's first text child replaced
pub fn update_text(tree: &[DocumentNode], node_id: &str, new_text: &str) -> Vec<DocumentNode> {
    let mut out = tree.to_vec();
    update_text_mut(&mut out, node_id, new_text);
    out
}

/// In-place variant of [`update_text`]. Returns whether a text leaf changed.
pub fn update_text_mut(tree: &mut [DocumentNode], node_id: &str, new_text: &str) -> bool {
    let Some(element) = find_element_mut(tree, node_id) else {
        debug!(node_id, "UpdateText target not found, tree unchanged");
        return false;
    };

    let Some(index) = element.first_text_index() else {
        debug!(node_id, "UpdateText target has no text child, tree unchanged");
        return false;
    };

    match &mut element.children[index] {
        DocumentNode::Text(leaf) => {
            leaf.text = new_text.to_string();
            true
        }
        DocumentNode::Element(_) => false,
    }
}

/// First element in document order whose node id matches `node_id`
pub fn find_element<'a>(tree: &'a [DocumentNode], node_id: &str) -> Option<&'a ElementNode> {
    for node in tree {
        if let DocumentNode::Element(el) = node {
            if el.node_id.as_ref().is_some_and(|id| id.matches(node_id)) {
                return Some(el);
            }
            if let Some(found) = find_element(&el.children, node_id) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_element_mut<'a>(
    tree: &'a mut [DocumentNode],
    node_id: &str,
) -> Option<&'a mut ElementNode> {
    for node in tree.iter_mut() {
        if let DocumentNode::Element(el) = node {
            if el.node_id.as_ref().is_some_and(|id| id.matches(node_id)) {
                return Some(el);
            }
            if let Some(found) = find_element_mut(&mut el.children, node_id) {
                return Some(found);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_ids::assign_ids;
    use serde_json::json;

    fn list_tree() -> Vec<DocumentNode> {
        assign_ids(&[DocumentNode::element("ul").with_child(
            DocumentNode::element("li")
                .with_child(DocumentNode::text("first"))
                .with_child(DocumentNode::element("link").with_child(DocumentNode::text("x")))
                .with_child(DocumentNode::text("tail")),
        )])
    }

    #[test]
    fn test_scenario_paragraph_update() {
        let tree: Vec<DocumentNode> = serde_json::from_value(json!([
            {"type": "p", "nodeId": "0", "children": [{"text": "Hello world"}]}
        ]))
        .unwrap();

        assert_eq!(assign_ids(&tree), tree);

        let updated = update_text(&tree, "0", "Updated");
        assert_eq!(
            serde_json::to_value(&updated).unwrap(),
            json!([{"type": "p", "nodeId": "0", "children": [{"text": "Updated"}]}])
        );
    }

    #[test]
    fn test_only_first_text_child_changes() {
        let tree = list_tree();
        let updated = update_text(&tree, "0.0", "changed");

        let li = updated[0].as_element().unwrap().children[0].as_element().unwrap();
        assert_eq!(li.children.len(), 3);
        assert_eq!(li.children[0].as_text().unwrap().text, "changed");
        assert_eq!(li.children[1].text_content(), "x");
        assert_eq!(li.children[2].as_text().unwrap().text, "tail");
        assert!(li.stray_text.is_none());
    }

    #[test]
    fn test_missing_id_is_noop() {
        let tree = list_tree();
        assert_eq!(update_text(&tree, "missing", "x"), tree);
        assert_eq!(update_text(&tree, "9.9", "x"), tree);
    }

    #[test]
    fn test_container_without_text_child_untouched() {
        let tree = list_tree();
        let mut copy = tree.clone();
        assert!(!update_text_mut(&mut copy, "0", "x"));
        assert_eq!(copy, tree);
    }

    #[test]
    fn test_dash_separator_matches() {
        let tree = list_tree();
        let updated = update_text(&tree, "0-0-1", "y");
        assert_eq!(
            find_element(&updated, "0.0.1").unwrap().children[0]
                .as_text()
                .unwrap()
                .text,
            "y"
        );
    }

    #[test]
    fn test_original_left_intact() {
        let tree = list_tree();
        let _ = update_text(&tree, "0.0.1", "new");
        assert_eq!(find_element(&tree, "0.0.1").unwrap().children[0].text_content(), "x");
    }
}
