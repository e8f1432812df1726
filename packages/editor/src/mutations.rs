//! # Document Mutations
//!
//! Serializable edits sent from the live-tree host to the document-model
//! owner.
//!
//! ### UpdateText
//! - Replaces the first text leaf of the element with `node_id`
//! - Atomic replacement (not character diff), last write wins
//! - Unknown ids are no-ops: the id may be stale after a concurrent re-render

use inkbridge_document::{update_text_mut, DocumentNode};
use serde::{Deserialize, Serialize};

/// Semantic mutations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Update the text of an element's first text leaf
    UpdateText { node_id: String, content: String },
}

impl Mutation {
    /// Apply to `tree`, returning whether anything changed
    pub fn apply(&self, tree: &mut [DocumentNode]) -> bool {
        match self {
            Mutation::UpdateText { node_id, content } => update_text_mut(tree, node_id, content),
        }
    }

    pub fn node_id(&self) -> &str {
        match self {
            Mutation::UpdateText { node_id, .. } => node_id,
        }
    }

    /// Debug name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::UpdateText { .. } => "UpdateText",
        }
    }
}

/// Result of applying a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResult {
    /// Document version after the mutation
    pub version: u64,

    /// False when the target id was not found (tree unchanged)
    pub applied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkbridge_document::assign_ids;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdateText {
            node_id: "0.1".to_string(),
            content: "Hello World".to_string(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_apply_reports_missing_target() {
        let mut tree = assign_ids(&[DocumentNode::element("p").with_child(DocumentNode::text("a"))]);

        let missing = Mutation::UpdateText {
            node_id: "".to_string(),
            content: "x".to_string(),
        };
        assert!(!missing.apply(&mut tree));

        let hit = Mutation::UpdateText {
            node_id: "0".to_string(),
            content: "b".to_string(),
        };
        assert!(hit.apply(&mut tree));
        assert_eq!(tree[0].text_content(), "b");
    }
}
