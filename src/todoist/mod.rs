//! Todoist integration
//!
//! Every sub-task becomes one Todoist task. Pushing is fire-and-forget: each
//! request is sent once, in plan order, and a failure is logged and skipped.

pub mod client;
pub mod error;

pub use client::{TodoistClient, DEFAULT_API_URL};
pub use error::{PushError, Result};

use tracing::{debug, warn};

use crate::syllabus::SubTask;

/// Sends one sub-task to a task tracker
#[allow(async_fn_in_trait)]
pub trait TaskPusher {
    async fn push(&self, task: &SubTask) -> Result<()>;
}

/// Outcome counts of a [`push_all`] run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PushSummary {
    pub sent: usize,
    pub failed: usize,
}

/// Push every sub-task sequentially. Failures never stop the remaining pushes.
pub async fn push_all<P: TaskPusher>(pusher: &P, subtasks: &[SubTask]) -> PushSummary {
    let mut summary = PushSummary::default();
    for task in subtasks {
        match pusher.push(task).await {
            Ok(()) => {
                debug!("Pushed {:?} due {}", task.label, task.date_string());
                summary.sent += 1;
            }
            Err(e) => {
                warn!("Failed to push {:?}: {}", task.label, e);
                summary.failed += 1;
            }
        }
    }
    summary
}
