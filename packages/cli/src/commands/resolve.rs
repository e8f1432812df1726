use super::{print_json, read_tree};
use anyhow::{anyhow, Result};
use clap::Args;
use inkbridge_common::{parse_path, BridgeConfig, NodeId};
use inkbridge_document::{get_node_id_from_path, DocumentNode, NodeLocation};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Input JSON document tree (`-` for stdin)
    pub input: PathBuf,

    /// Document path, e.g. 0.1.0
    #[arg(long)]
    pub path: String,
}

/// Print the resolved location as JSON, or `null` when the path misses
pub fn resolve(args: ResolveArgs, config: &BridgeConfig) -> Result<()> {
    let path = parse_path(&args.path).ok_or_else(|| anyhow!("Invalid path: {}", args.path))?;
    let tree = read_tree(&args.input)?;

    print_json(&locate(&tree, &path, config.separator))
}

/// Resolve `path`, writing the node id with the configured separator
fn locate<'a>(tree: &'a [DocumentNode], path: &[usize], separator: char) -> Option<NodeLocation<'a>> {
    let mut location = get_node_id_from_path(tree, path)?;
    if let Some(segments) = location.node_id.segments() {
        location.node_id = NodeId::from_segments(&segments, separator);
    }
    Some(location)
}
