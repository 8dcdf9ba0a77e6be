//! Command-line definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::breakdown::BreakdownArgs;
use super::config::ConfigCommands;
use super::deadlines::DeadlinesArgs;
use super::plan::PlanArgs;

#[derive(Parser)]
#[command(name = "classradar")]
#[command(about = "Turn syllabus deadlines into a scheduled study plan")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (also: CLASSRADAR_DEBUG=1)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a study plan from a syllabus, draw the heatmap and push to Todoist
    Plan(PlanArgs),

    /// List the deadlines found in a syllabus
    Deadlines(DeadlinesArgs),

    /// Break a single assignment into scheduled sub-tasks
    Breakdown(BreakdownArgs),

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
