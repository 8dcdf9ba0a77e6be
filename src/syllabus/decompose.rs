//! Study-plan scheduling
//!
//! An assignment with `n` sub-steps gets a lead window of `2n` days before its
//! due date. The window holds `2n + 1` calendar days (both ends inclusive) and
//! the steps land on every `max(1, days / n)`-th of them, earliest step first:
//!
//! ```text
//! due 2025-02-10, 4 steps -> window 02-02..=02-10 (9 days), step 2
//! Research 02-02, Draft 02-04, Revise 02-06, Submit 02-08
//! ```

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::model::{Assignment, SubStepSequence, SubTask};

/// Break one assignment into scheduled sub-tasks.
///
/// Returns at most `sub_steps.len()` entries, all on or before `due_date`.
/// Step names beyond the number of chosen days are dropped, so an empty
/// sequence yields an empty plan.
pub fn break_down_task(
    title: &str,
    due_date: NaiveDate,
    sub_steps: &SubStepSequence,
) -> Vec<SubTask> {
    let n = sub_steps.len();
    let schedule_days = schedule_window(due_date, n);

    let step = schedule_days.len().checked_div(n).unwrap_or(0).max(1);

    sub_steps
        .iter()
        .zip(schedule_days.iter().step_by(step).take(n))
        .map(|(name, day)| SubTask::new(name, title, *day))
        .collect()
}

/// [`break_down_task`] with the default Research/Draft/Revise/Submit steps
pub fn break_down_default(title: &str, due_date: NaiveDate) -> Vec<SubTask> {
    break_down_task(title, due_date, &SubStepSequence::default())
}

/// Plan every assignment, concatenating the sub-tasks in assignment order
pub fn decompose_all(assignments: &[Assignment], sub_steps: &SubStepSequence) -> Vec<SubTask> {
    assignments
        .iter()
        .flat_map(|a| break_down_task(&a.title, a.due_date, sub_steps))
        .collect()
}

/// Every day from `due - 2n` through `due`, ascending.
fn schedule_window(due_date: NaiveDate, n: usize) -> Vec<NaiveDate> {
    let lead = Days::new(2 * n as u64);
    let start_date = due_date.checked_sub_days(lead).unwrap_or(NaiveDate::MIN);

    let days: Vec<NaiveDate> = start_date
        .iter_days()
        .take_while(|day| *day <= due_date)
        .collect();

    // Defensive guard: the window always holds 2n + 1 days unless it was
    // clipped at NaiveDate::MIN. Falls back to the n days ending on the due date.
    if days.len() < n {
        debug!(
            "Lead window for {} shorter than {} steps, using fallback",
            due_date, n
        );
        let mut fallback: Vec<NaiveDate> = (0..n as u64)
            .filter_map(|i| due_date.checked_sub_days(Days::new(i)))
            .collect();
        fallback.reverse();
        return fallback;
    }

    days
}
