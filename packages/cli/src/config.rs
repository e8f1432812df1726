use anyhow::Context;
use inkbridge_common::BridgeConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load the bridge configuration from `dir`, or from the working directory
pub fn load(dir: Option<&Path>) -> anyhow::Result<BridgeConfig> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Cannot get current directory")?,
    };
    load_from(&dir)
}

fn load_from(dir: &Path) -> anyhow::Result<BridgeConfig> {
    let path: PathBuf = BridgeConfig::config_path(dir);
    let config = BridgeConfig::load(dir)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    debug!(path = %path.display(), separator = %config.separator, "Loaded configuration");
    Ok(config)
}
