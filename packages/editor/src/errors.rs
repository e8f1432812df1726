//! Error types for the editor

use inkbridge_common::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Configuration error: {0}")]
    Config(#[from] BridgeError),

    #[error("Document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
