use thiserror::Error;

/// Common error type for the fallible edges of the engine
///
/// Coordinate resolution never fails with an error: misses are expressed as
/// `None` or an unchanged tree. This type only covers I/O, configuration and
/// deserialization of externally supplied data.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
