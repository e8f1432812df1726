//! # Node Id Assignment
//!
//! Stamps every element with its path from the root, e.g. the second child
//! of the first root node gets `"0.1"`. Text and element children both
//! consume an index slot, so a text sibling preceding an element shifts the
//! element's number. Text leaves are never stamped.
//!
//! Ids are recomputed from scratch on every call: a stamped id from a
//! previous revision is overwritten, never trusted.

use crate::model::DocumentNode;
use inkbridge_common::{NodeId, CANONICAL_SEPARATOR};
use tracing::{debug, instrument};

/// Path-based node id stamper
#[derive(Debug, Clone, Copy)]
pub struct NodeIdAssigner {
    separator: char,
}

impl NodeIdAssigner {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Return a copy of `tree` with every element stamped
    pub fn assign(&self, tree: &[DocumentNode]) -> Vec<DocumentNode> {
        let mut out = tree.to_vec();
        self.assign_mut(&mut out);
        out
    }

    /// Stamp `tree` in place, returning the number of elements stamped
    #[instrument(skip_all, fields(roots = tree.len()))]
    pub fn assign_mut(&self, tree: &mut [DocumentNode]) -> usize {
        let mut path = Vec::new();
        let stamped = self.stamp(tree, &mut path);
        debug!(stamped, "Assigned node ids");
        stamped
    }

    fn stamp(&self, nodes: &mut [DocumentNode], path: &mut Vec<usize>) -> usize {
        let mut stamped = 0;
        for (i, node) in nodes.iter_mut().enumerate() {
            // Malformed element-with-text nodes land here too; the stray
            // text is left alone and does not affect numbering.
            if let DocumentNode::Element(el) = node {
                path.push(i);
                el.node_id = Some(NodeId::from_segments(path, self.separator));
                stamped += 1 + self.stamp(&mut el.children, path);
                path.pop();
            }
        }
        stamped
    }
}

impl Default for NodeIdAssigner {
    fn default() -> Self {
        Self::new(CANONICAL_SEPARATOR)
    }
}

/// Stamp every element with its canonical path id
pub fn assign_ids(tree: &[DocumentNode]) -> Vec<DocumentNode> {
    NodeIdAssigner::default().assign(tree)
}

/// In-place variant of [`assign_ids`]
pub fn assign_ids_mut(tree: &mut [DocumentNode]) -> usize {
    NodeIdAssigner::default().assign_mut(tree)
}
