//! xtask - Development tasks for classradar

use classradar::syllabus::{decompose_all, extract_tasks, SubStepSequence};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

const DOCS_DIR: &str = "docs";

const SAMPLE_SYLLABUS: &str = "\
PHIL 101 - Introduction to Ethics
Feb 10, 2025   Essay on Ethics
Feb 12, 2025   Reading Response 1
Mar 3, 2025    Midterm Paper
Apr 28, 2025   Final Project
";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for classradar")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI reference docs from the clap definitions
    GenDocs,

    /// Regenerate the sample plan shown in the docs
    GenSample,
}

fn main() {
    let args = Xtask::parse();
    let written = match args.command {
        Commands::GenDocs => write_doc(
            "cli/reference.md",
            clap_markdown::help_markdown::<classradar::cli::Cli>(),
        ),
        Commands::GenSample => write_doc("sample-plan.md", sample_plan()),
    };
    println!("Generated {}", written.display());
}

fn sample_plan() -> String {
    let assignments = extract_tasks(SAMPLE_SYLLABUS);
    let subtasks = decompose_all(&assignments, &SubStepSequence::default());

    let mut out = String::from("# Sample plan\n\n```text\n");
    out.push_str(SAMPLE_SYLLABUS);
    out.push_str("```\n\n| Date | Task |\n|------|------|\n");
    for task in &subtasks {
        out.push_str(&format!("| {} | {} |\n", task.date_string(), task.label));
    }
    out
}

fn write_doc(relative: &str, content: String) -> PathBuf {
    let path = Path::new(DOCS_DIR).join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create docs directory");
    }
    fs::write(&path, content).expect("Failed to write docs");
    path
}
