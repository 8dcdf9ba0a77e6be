//! `classradar breakdown` command implementation

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::config::Config;
use crate::syllabus::{
    break_down_task, is_valid_due_date, SubStepSequence, SubTask, DATE_FORMAT, DUE_YEARS,
};

#[derive(Args)]
pub struct BreakdownArgs {
    /// Assignment title
    title: String,

    /// Due date (YYYY-MM-DD)
    due: String,

    /// Comma-separated sub-steps, e.g. "Outline,Draft,Submit"
    #[arg(short, long)]
    steps: Option<SubStepSequence>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn parse_due(due: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(due, DATE_FORMAT)
        .with_context(|| format!("Invalid due date {:?}, expected YYYY-MM-DD", due))?;
    if !is_valid_due_date(date) {
        bail!(
            "Invalid due date {:?}, year must be between {} and {}",
            due,
            DUE_YEARS.start(),
            DUE_YEARS.end()
        );
    }
    Ok(date)
}

fn plan(args: &BreakdownArgs, steps: &SubStepSequence) -> Result<Vec<SubTask>> {
    Ok(break_down_task(&args.title, parse_due(&args.due)?, steps))
}

pub async fn run(args: BreakdownArgs) -> Result<()> {
    let steps = match &args.steps {
        Some(steps) => steps.clone(),
        None => Config::load()?.plan.sub_steps,
    };

    let subtasks = plan(&args, &steps)?;

    if args.json {
        return super::print_json(&subtasks);
    }
    super::print_plan_table(&subtasks);
    Ok(())
}
