//! # Edit Session Management
//!
//! An EditSession owns one document model and drives the render cycle:
//!
//! ```text
//! render_tree() ──→ host renderer ──→ live tree
//!      ↑                                  │ user types
//!      │                                  ↓
//! apply(UpdateText) ←── commit_live_text / capture_caret
//! ```
//!
//! Node ids are restamped on every `render_tree()` call; ids from an earlier
//! revision are never trusted. Caret restoration must run against the
//! settled tree of the new render, which is the host's job to schedule.

use crate::{EditorError, Mutation, MutationResult};
use inkbridge_common::BridgeConfig;
use inkbridge_document::{
    find_element, from_json, validate, DocumentNode, NodeIdAssigner, StructuralIssue,
};
use inkbridge_live::{LiveTree, LiveView};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, instrument};

/// Single edit session
pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    /// Current version number (increments on each applied mutation)
    pub version: u64,

    pub(crate) config: BridgeConfig,

    pub(crate) tree: Vec<DocumentNode>,

    /// Applied mutations not yet handed to the transport
    pending_mutations: Vec<PendingMutation>,
}

/// Applied mutation waiting to be forwarded
#[derive(Debug, Clone)]
pub struct PendingMutation {
    /// Unique mutation ID
    pub id: String,

    pub mutation: Mutation,

    /// When it was applied (ms since epoch)
    pub timestamp: u64,
}

impl EditSession {
    /// Create a session; the tree is stamped immediately
    pub fn new(id: impl Into<String>, config: BridgeConfig, tree: Vec<DocumentNode>) -> Self {
        let mut session = Self {
            id: id.into(),
            version: 0,
            config,
            tree,
            pending_mutations: Vec::new(),
        };
        session.restamp();
        session
    }

    /// Create a session from a JSON document tree
    pub fn from_json(
        id: impl Into<String>,
        config: BridgeConfig,
        json: &str,
    ) -> Result<Self, EditorError> {
        let tree = from_json(json)?;
        Ok(Self::new(id, config, tree))
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn document(&self) -> &[DocumentNode] {
        &self.tree
    }

    /// Restamp ids and return the tree to hand to the renderer
    pub fn render_tree(&mut self) -> &[DocumentNode] {
        self.restamp();
        &self.tree
    }

    /// Structural problems in the current tree
    pub fn issues(&self) -> Vec<StructuralIssue> {
        validate(&self.tree)
    }

    /// Apply a mutation to the document model
    #[instrument(skip(self, mutation), fields(session = %self.id, mutation = mutation.name()))]
    pub fn apply(&mut self, mutation: Mutation) -> MutationResult {
        let applied = mutation.apply(&mut self.tree);
        if applied {
            self.version += 1;
            let id = format!("{}-{}", self.id, self.version);
            self.pending_mutations.push(PendingMutation {
                id,
                mutation,
                timestamp: current_timestamp(),
            });
        }
        debug!(applied, version = self.version, "Mutation processed");

        MutationResult {
            version: self.version,
            applied,
        }
    }

    /// Drain applied mutations for the transport
    pub fn take_pending(&mut self) -> Vec<PendingMutation> {
        std::mem::take(&mut self.pending_mutations)
    }

    /// Commit the live text of an identified element back to the model.
    ///
    /// The live text node standing for the element's first text leaf is
    /// located by document-model index and its visible text becomes the new
    /// leaf content. A leaf rendered as an artifact commits as empty text.
    /// Returns `None` when the element carries no identifier, the identifier
    /// is unknown, or no live text node sits at that index.
    pub fn commit_live_text<T: LiveTree>(
        &mut self,
        live: &T,
        element: T::Node,
    ) -> Option<MutationResult> {
        let view = LiveView::with_config(live, &self.config);
        let node_id = view.node_id_of(element)?.to_string();

        let index = find_element(&self.tree, &node_id)?.first_text_index()?;
        let leaf = view.find_text_by_slate_index(element, index)?;
        let content = view.text_content(leaf);

        Some(self.apply(Mutation::UpdateText { node_id, content }))
    }

    fn restamp(&mut self) {
        NodeIdAssigner::new(self.config.separator).assign_mut(&mut self.tree);
    }
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
