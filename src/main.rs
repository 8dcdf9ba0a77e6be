//! ClassRadar - Turn syllabus deadlines into a scheduled study plan

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use classradar::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose || std::env::var("CLASSRADAR_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("classradar=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Plan(args) => cli::plan::run(args).await,
        Commands::Deadlines(args) => cli::deadlines::run(args).await,
        Commands::Breakdown(args) => cli::breakdown::run(args).await,
        Commands::Config { command } => cli::config::run(command).await,
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "classradar", &mut std::io::stdout());
            Ok(())
        }
    }
}
