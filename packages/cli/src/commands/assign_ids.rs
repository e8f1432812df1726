use super::{print_json, read_tree};
use anyhow::Result;
use clap::Args;
use inkbridge_common::BridgeConfig;
use inkbridge_document::NodeIdAssigner;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AssignIdsArgs {
    /// Input JSON document tree (`-` for stdin)
    pub input: PathBuf,
}

pub fn assign_ids(args: AssignIdsArgs, config: &BridgeConfig) -> Result<()> {
    let tree = read_tree(&args.input)?;
    let stamped = NodeIdAssigner::new(config.separator).assign(&tree);
    print_json(&stamped)
}
