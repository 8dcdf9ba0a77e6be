//! `classradar deadlines` command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::extract::{AutoExtractor, TextExtractor};
use crate::syllabus::extract_tasks;

#[derive(Args)]
pub struct DeadlinesArgs {
    /// Syllabus document (PDF or plain text)
    file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: DeadlinesArgs) -> Result<()> {
    let document = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read document {:?}", args.file))?;
    let text = AutoExtractor
        .extract_text(&document)
        .context("Failed to extract text from document")?;
    let assignments = extract_tasks(&text);

    if args.json {
        return super::print_json(&assignments);
    }

    if assignments.is_empty() {
        println!("No deadlines found in {:?}", args.file);
        return Ok(());
    }

    println!("Deadlines ({}):\n", assignments.len());
    for assignment in &assignments {
        println!("{}", assignment);
    }
    Ok(())
}
