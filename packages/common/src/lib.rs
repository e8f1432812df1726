//! # Inkbridge Common
//!
//! Types shared by the document-model and live-tree halves of the sync
//! engine: hierarchical node identifiers, document paths, the zero-width
//! sentinel characters renderers use to keep empty inline elements
//! focusable, and the bridge configuration.

pub mod config;
pub mod error;
pub mod node_id;
pub mod result;
pub mod sentinel;

pub use config::*;
pub use error::*;
pub use node_id::*;
pub use result::*;
pub use sentinel::*;
