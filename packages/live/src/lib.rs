//! # Inkbridge Live
//!
//! Live-tree half of the sync engine. Given a rendered tree that honors the
//! attribute contract (element ids mirrored verbatim, editable roots
//! marked), it reconstructs document-model coordinates:
//!
//! ```text
//! live text node + offset
//!        │  LiveView::get_path            (path.rs)
//!        │  LiveView::visible_offset      (offset.rs)
//!        ↓
//! document path + visible offset
//!        │  ... document model edits, re-render ...
//!        ↓
//! LiveView::find_by_node_id + find_position_by_visible_offset
//!        ↓
//! restored caret
//! ```
//!
//! Renderers may inject empty or whitespace text and id-less wrapper
//! elements; those are tolerated and skipped. The tree is only ever read.

mod artifact;
mod document;
mod offset;
mod path;
mod tree;
mod view;
mod walker;

pub use artifact::{is_artifact, ArtifactFilter};
pub use document::{LiveDocument, LiveNode, LiveNodeId};
pub use tree::{
    children, contains, descendants, next_after_subtree, next_in_order, Children,
    Descendants, LiveTree,
};
pub use view::{LiveView, Position};
pub use walker::TextWalker;

// Re-export configuration types hosts need to build a view
pub use inkbridge_common::{ArtifactPolicy, BridgeConfig};
