mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    assign_ids, resolve, update_text, validate, AssignIdsArgs, ResolveArgs, UpdateTextArgs,
    ValidateArgs,
};
use std::path::PathBuf;

/// Inkbridge CLI - document-model tools for rich-text editors
#[derive(Parser, Debug)]
#[command(name = "inkbridge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing inkbridge.config.json (defaults to cwd)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stamp positional node ids onto a document tree
    AssignIds(AssignIdsArgs),

    /// Replace the text of an element's first text leaf
    UpdateText(UpdateTextArgs),

    /// Resolve a document path to its owning element id
    Resolve(ResolveArgs),

    /// Report structural problems in a document tree
    Validate(ValidateArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = config::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Command::AssignIds(args) => assign_ids(args, &config),
        Command::UpdateText(args) => update_text(args),
        Command::Resolve(args) => resolve(args, &config),
        Command::Validate(args) => validate(args),
    });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
