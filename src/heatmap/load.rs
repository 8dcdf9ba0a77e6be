//! Per-day workload counting

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::syllabus::SubTask;

/// Number of sub-tasks scheduled on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyLoad {
    pub date: NaiveDate,
    pub count: usize,
}

/// Count sub-tasks per day over the full span from the earliest to the latest
/// scheduled date. Days with nothing scheduled are present with a zero count.
pub fn daily_load(subtasks: &[SubTask]) -> Vec<DailyLoad> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for task in subtasks {
        *counts.entry(task.scheduled_date).or_default() += 1;
    }

    let (Some((&first, _)), Some((&last, _))) = (counts.first_key_value(), counts.last_key_value())
    else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|date| DailyLoad {
            date,
            count: counts.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Busiest day's count, 0 for an empty plan
pub fn peak(loads: &[DailyLoad]) -> usize {
    loads.iter().map(|l| l.count).max().unwrap_or(0)
}
