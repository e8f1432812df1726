use super::{print_json, read_tree};
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use inkbridge_document::{validate as validate_tree, IssueLevel, StructuralIssue};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Input JSON document tree (`-` for stdin)
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let tree = read_tree(&args.input)?;
    let issues = validate_tree(&tree);

    match args.format {
        OutputFormat::Json => print_json(&issues)?,
        OutputFormat::Text => print_text(&args.input, &issues),
    }

    // Exit with error code if there are errors
    if issues.iter().any(|i| i.level == IssueLevel::Error) {
        std::process::exit(1);
    }

    Ok(())
}

fn print_text(input: &std::path::Path, issues: &[StructuralIssue]) {
    if issues.is_empty() {
        println!("{} {}", "✓".green(), input.display());
        return;
    }

    println!("{}", input.display().to_string().bold());
    for issue in issues {
        let level = match issue.level {
            IssueLevel::Error => "error".red().bold(),
            IssueLevel::Warning => "warning".yellow().bold(),
        };
        println!("  {}: {}", level, issue.message());
    }

    let errors = issues.iter().filter(|i| i.level == IssueLevel::Error).count();
    let warnings = issues.len() - errors;
    println!();
    if errors > 0 {
        println!("   {} {}", "Errors:".red(), errors);
    }
    if warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), warnings);
    }
}
