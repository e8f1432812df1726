use super::{print_json, read_tree};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use inkbridge_document::update_text_mut;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct UpdateTextArgs {
    /// Input JSON document tree (`-` for stdin)
    pub input: PathBuf,

    /// Identifier of the element to update
    #[arg(long)]
    pub node_id: String,

    /// Replacement text for the element's first text leaf
    #[arg(long)]
    pub text: String,
}

pub fn update_text(args: UpdateTextArgs) -> Result<()> {
    let mut tree = read_tree(&args.input)?;

    if !update_text_mut(&mut tree, &args.node_id, &args.text) {
        eprintln!(
            "{} no element with a text leaf has id '{}', tree unchanged",
            "warning:".yellow().bold(),
            args.node_id
        );
    }

    print_json(&tree)
}
