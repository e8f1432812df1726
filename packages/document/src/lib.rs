//! # Inkbridge Document
//!
//! Document-model half of the sync engine.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Element | Text tree (Slate JSON)     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ node_ids: stamp path ids before each render │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ resolve: path → element id + leaf index     │
//! │ mutations: leaf text replacement by id      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a pure function over an in-memory tree. Misses
//! (unknown id, out-of-range path) come back as `None` or an unchanged
//! tree, never as an error.

pub mod model;
pub mod mutations;
pub mod node_ids;
pub mod resolve;
pub mod validator;
pub mod visitor;

pub use model::{from_json, DocumentNode, ElementNode, NodeShapeError, TextNode};
pub use mutations::{find_element, find_element_mut, update_text, update_text_mut};
pub use node_ids::{assign_ids, assign_ids_mut, NodeIdAssigner};
pub use resolve::{calculate_absolute_offset, get_node_id_from_path, NodeLocation};
pub use validator::{validate, IssueKind, IssueLevel, StructuralIssue, Validator};
pub use visitor::{walk_element, walk_node, walk_tree, NodeCounter, Visitor};
