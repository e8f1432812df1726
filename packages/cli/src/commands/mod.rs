pub mod assign_ids;
pub mod resolve;
pub mod update_text;
pub mod validate;

pub use assign_ids::{assign_ids, AssignIdsArgs};
pub use resolve::{resolve, ResolveArgs};
pub use update_text::{update_text, UpdateTextArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::Context;
use inkbridge_document::DocumentNode;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Read a JSON document tree from a file, or stdin when the path is `-`
pub(crate) fn read_tree(input: &Path) -> anyhow::Result<Vec<DocumentNode>> {
    let source = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    inkbridge_document::from_json(&source)
        .with_context(|| format!("Invalid document tree in {}", input.display()))
}

/// Pretty-print a value as JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
