//! # Inkbridge Editor
//!
//! Edit sessions tying a document model to the live tree rendered from it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: model, ids, update_text, resolve  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Restamp ids on every render              │
//! │  - Apply mutations, track version           │
//! │  - Capture/restore caret across re-renders  │
//! └─────────────────────────────────────────────┘
//!                     ↑
//! ┌─────────────────────────────────────────────┐
//! │ live: offsets and paths on the settled tree │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Model is source of truth**: the live tree is a derived view
//! 2. **Ids are positional**: never reuse an id across renders
//! 3. **Last write wins**: text updates replace the whole leaf
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inkbridge_editor::{EditSession, Mutation};
//!
//! let mut session = EditSession::from_json("client-1", config, json)?;
//! render(session.render_tree());
//!
//! // On input: capture caret, commit, re-render, restore
//! let caret = session.capture_caret(&live, selection)?;
//! session.commit_live_text(&live, paragraph);
//! render(session.render_tree());
//! let selection = session.restore_caret(&new_live, root, &caret);
//! ```

mod caret;
mod errors;
mod mutations;
mod session;

pub use caret::{capture_caret, restore_caret, Caret};
pub use errors::EditorError;
pub use mutations::{Mutation, MutationResult};
pub use session::{EditSession, PendingMutation};
