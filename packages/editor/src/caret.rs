//! # Caret Preservation Across Re-renders
//!
//! A live-tree caret does not survive a re-render: the nodes it pointed at
//! are replaced. Before committing an edit the caret is captured in
//! document-model terms (the owning element id plus a visible offset inside
//! it); after the new tree has settled it is resolved back to a live
//! position.
//!
//! ```text
//! live (node, offset) ──get_path──→ path ──get_node_id_from_path──→ element id
//!                                                                     + offset
//! new live tree ←──find_position_by_visible_offset── find_by_node_id ←─┘
//! ```

use crate::session::EditSession;
use inkbridge_common::Path;
use inkbridge_document::{calculate_absolute_offset, get_node_id_from_path, DocumentNode};
use inkbridge_live::{LiveTree, LiveView, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Caret expressed in document-model terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caret {
    /// Document path of the node the caret was in
    pub path: Path,

    /// Element owning the caret
    pub node_id: String,

    /// Text leaf index when the caret was inside text
    pub text_child_index: Option<usize>,

    /// Visible characters before the caret, across the whole element
    pub offset: usize,
}

/// Capture `position` from a live tree rendered from `tree`.
///
/// Returns `None` when the position cannot be mapped to the model, e.g. it
/// sits outside every editable root or the model has changed shape since
/// the live tree was rendered.
#[instrument(level = "debug", skip_all)]
pub fn capture_caret<T: LiveTree>(
    view: &LiveView<'_, T>,
    tree: &[DocumentNode],
    position: Position<T::Node>,
) -> Option<Caret> {
    let path = view.get_path(position.node)?;
    let location = get_node_id_from_path(tree, &path)?;
    let inner = view.visible_offset(position.node, position)?;

    let offset = match location.text_child_index {
        Some(index) => calculate_absolute_offset(location.parent_children, index, inner),
        None => inner,
    };
    debug!(?path, node_id = %location.node_id, offset, "Captured caret");

    Some(Caret {
        node_id: location.node_id.into_string(),
        text_child_index: location.text_child_index,
        path,
        offset,
    })
}

/// Resolve a captured caret inside the live subtree under `root`
pub fn restore_caret<T: LiveTree>(
    view: &LiveView<'_, T>,
    root: T::Node,
    caret: &Caret,
) -> Option<Position<T::Node>> {
    let Some(element) = view.find_by_node_id(root, &caret.node_id) else {
        debug!(node_id = %caret.node_id, "Caret owner no longer rendered");
        return None;
    };
    view.find_position_by_visible_offset(element, caret.offset)
}

impl EditSession {
    /// Capture a caret from a live tree rendered from this session
    pub fn capture_caret<T: LiveTree>(
        &self,
        live: &T,
        position: Position<T::Node>,
    ) -> Option<Caret> {
        let view = LiveView::with_config(live, &self.config);
        capture_caret(&view, &self.tree, position)
    }

    /// Resolve a caret against a freshly rendered live tree
    pub fn restore_caret<T: LiveTree>(
        &self,
        live: &T,
        root: T::Node,
        caret: &Caret,
    ) -> Option<Position<T::Node>> {
        let view = LiveView::with_config(live, &self.config);
        restore_caret(&view, root, caret)
    }
}
