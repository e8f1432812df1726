//! Path → node id resolution on the document model
//!
//! The live tree only knows element ids, so a path that addresses a text
//! leaf resolves to its parent element plus the leaf's index. Callers then
//! use [`calculate_absolute_offset`] to turn an offset inside that leaf into
//! an offset across the whole parent, which is what the live-tree side can
//! map back to a caret.

use crate::model::DocumentNode;
use inkbridge_common::{NodeId, CANONICAL_SEPARATOR};
use serde::Serialize;

/// Where a document path lands, expressed in live-tree terms
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeLocation<'a> {
    /// Addressed element, or the parent element of the addressed text leaf
    pub node_id: NodeId,
    /// Index of the addressed text leaf among its parent's children
    pub text_child_index: Option<usize>,
    /// The sibling array containing the addressed node
    pub parent_children: &'a [DocumentNode],
}

/// Descend `tree` along `path`.
///
/// Returns `None` for an empty path, an out-of-range segment, a path that
/// continues below a text leaf, or a text leaf with no parent element.
/// Elements that were never stamped resolve to the id their position implies.
pub fn get_node_id_from_path<'a>(
    tree: &'a [DocumentNode],
    path: &[usize],
) -> Option<NodeLocation<'a>> {
    let (&last, ancestors) = path.split_last()?;

    let mut siblings = tree;
    let mut parent_id: Option<NodeId> = None;
    for (depth, &index) in ancestors.iter().enumerate() {
        let el = siblings.get(index)?.as_element()?;
        parent_id = Some(
            el.node_id
                .clone()
                .unwrap_or_else(|| NodeId::from_segments(&path[..=depth], CANONICAL_SEPARATOR)),
        );
        siblings = &el.children;
    }

    match siblings.get(last)? {
        DocumentNode::Element(el) => Some(NodeLocation {
            node_id: el
                .node_id
                .clone()
                .unwrap_or_else(|| NodeId::from_segments(path, CANONICAL_SEPARATOR)),
            text_child_index: None,
            parent_children: siblings,
        }),
        DocumentNode::Text(_) => Some(NodeLocation {
            node_id: parent_id?,
            text_child_index: Some(last),
            parent_children: siblings,
        }),
    }
}

/// Visible length of every child before `text_child_index`, plus `inner_offset`.
///
/// Element children contribute their flattened text length, so an offset
/// just after an inline element lands after it rather than at block start.
pub fn calculate_absolute_offset(
    children: &[DocumentNode],
    text_child_index: usize,
    inner_offset: usize,
) -> usize {
    children
        .iter()
        .take(text_child_index)
        .map(|child| child.visible_text_len())
        .sum::<usize>()
        + inner_offset
}
