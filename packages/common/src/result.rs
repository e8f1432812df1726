use crate::error::BridgeError;

/// Common Result type alias
pub type BridgeResult<T> = Result<T, BridgeError>;
