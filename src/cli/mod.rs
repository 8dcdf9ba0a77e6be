//! CLI command implementations

pub mod breakdown;
pub mod config;
pub mod deadlines;
pub mod definition;
pub mod plan;

pub use definition::{Cli, Commands};

use anyhow::Result;
use serde::Serialize;

use crate::syllabus::SubTask;

const TABLE_COL_DATE: usize = 12;
const TABLE_COL_TASK: usize = 60;

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_plan_table(subtasks: &[SubTask]) {
    println!("{:<width$} TASK", "DATE", width = TABLE_COL_DATE);
    println!("{}", "-".repeat(TABLE_COL_DATE + TABLE_COL_TASK + 1));
    for task in subtasks {
        println!(
            "{:<width$} {}",
            task.date_string(),
            truncate(&task.label, TABLE_COL_TASK),
            width = TABLE_COL_DATE
        );
    }
}
