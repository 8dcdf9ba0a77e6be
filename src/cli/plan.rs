//! `classradar plan` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::pipeline::{process_file, DefaultCollaborators, RadarConfig};
use crate::syllabus::SubStepSequence;

#[derive(Args)]
pub struct PlanArgs {
    /// Syllabus document (PDF or plain text)
    file: PathBuf,

    /// Comma-separated sub-steps, e.g. "Outline,Draft,Submit"
    #[arg(short, long)]
    steps: Option<SubStepSequence>,

    /// Where to write the workload heatmap PNG
    #[arg(long, conflicts_with = "no_heatmap")]
    heatmap: Option<PathBuf>,

    /// Don't draw the heatmap
    #[arg(long)]
    no_heatmap: bool,

    /// Todoist API token
    #[arg(long, env = "CLASSRADAR_TODOIST_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Don't push tasks to Todoist
    #[arg(long)]
    no_push: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl PlanArgs {
    fn apply(self, mut config: RadarConfig) -> RadarConfig {
        if let Some(steps) = self.steps {
            config.sub_steps = steps;
        }
        if let Some(path) = self.heatmap {
            config.heatmap_path = Some(path);
        }
        if self.no_heatmap {
            config.heatmap_path = None;
        }
        if let Some(token) = self.token.filter(|t| !t.trim().is_empty()) {
            config.todoist_token = Some(token);
        }
        if self.no_push {
            config.todoist_token = None;
        }
        config
    }
}

pub async fn run(args: PlanArgs) -> Result<()> {
    let file = args.file.clone();
    let json = args.json;
    let config = args.apply(RadarConfig::from_config(&Config::load()?));
    let collaborators = DefaultCollaborators::from_config(&config)?;

    let subtasks = process_file(&file, &config, &collaborators).await?;

    if json {
        return super::print_json(&subtasks);
    }

    if subtasks.is_empty() {
        println!("No deadlines found in {:?}", file);
        return Ok(());
    }

    super::print_plan_table(&subtasks);
    if let Some(path) = &config.heatmap_path {
        println!("\nHeatmap: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn plan_args(argv: &[&str]) -> PlanArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Plan(args) => args,
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let args = plan_args(&[
            "classradar",
            "plan",
            "syllabus.pdf",
            "--steps",
            "Read,Write",
            "--no-heatmap",
            "--token",
            "abc",
        ]);
        let config = args.apply(RadarConfig::default());
        assert_eq!(config.sub_steps, SubStepSequence::new(["Read", "Write"]));
        assert!(config.heatmap_path.is_none());
        assert_eq!(config.todoist_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_blank_token_does_not_enable_push() {
        let args = plan_args(&["classradar", "plan", "syllabus.pdf", "--token", "  "]);
        let config = args.apply(RadarConfig::default());
        assert!(config.todoist_token.is_none());
    }

    #[test]
    fn test_no_push_wins_over_token() {
        let args = plan_args(&[
            "classradar",
            "plan",
            "syllabus.pdf",
            "--token",
            "abc",
            "--no-push",
        ]);
        let config = args.apply(RadarConfig::default());
        assert!(config.todoist_token.is_none());
    }

    #[test]
    fn test_heatmap_conflicts_with_no_heatmap() {
        let result = Cli::try_parse_from([
            "classradar",
            "plan",
            "s.pdf",
            "--heatmap",
            "a.png",
            "--no-heatmap",
        ]);
        assert!(result.is_err());
    }
}
