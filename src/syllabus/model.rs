//! Syllabus data model

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Output format for scheduled dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years a due date may fall in; anything else can't round-trip as `YYYY-MM-DD`
pub const DUE_YEARS: RangeInclusive<i32> = 1..=9999;

/// Whether `date` is usable as a due date
pub fn is_valid_due_date(date: NaiveDate) -> bool {
    DUE_YEARS.contains(&date.year())
}

/// Sub-steps used when the caller doesn't supply any
pub const DEFAULT_SUB_STEPS: [&str; 4] = ["Research", "Draft", "Revise", "Submit"];

/// An assignment found in a syllabus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assignment title, trimmed
    pub title: String,

    /// Due date
    pub due_date: NaiveDate,
}

impl Assignment {
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            due_date,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.due_date.format(DATE_FORMAT), self.title)
    }
}

/// One scheduled preparatory step of an assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    /// `<step>: <assignment title>`
    pub label: String,

    /// Day the step is scheduled for; serialized as `YYYY-MM-DD`
    #[serde(rename = "date")]
    pub scheduled_date: NaiveDate,
}

impl SubTask {
    /// Create a sub-task for `step` of the assignment titled `title`
    pub fn new(step: &str, title: &str, scheduled_date: NaiveDate) -> Self {
        Self {
            label: format!("{}: {}", step, title),
            scheduled_date,
        }
    }

    /// Scheduled date as `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.scheduled_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for SubTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.date_string(), self.label)
    }
}

/// Ordered step names an assignment is broken into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubStepSequence(Vec<String>);

impl SubStepSequence {
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(steps.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for SubStepSequence {
    fn default() -> Self {
        Self::new(DEFAULT_SUB_STEPS)
    }
}

/// Parses a comma-separated list, e.g. `Outline, Draft, Submit`.
/// Blank entries are ignored.
impl FromStr for SubStepSequence {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(
            s.split(',').map(str::trim).filter(|step| !step.is_empty()),
        ))
    }
}

impl fmt::Display for SubStepSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_subtask_label() {
        let task = SubTask::new("Draft", "Essay on Ethics", date(2025, 2, 4));
        assert_eq!(task.label, "Draft: Essay on Ethics");
        assert_eq!(task.date_string(), "2025-02-04");
        assert_eq!(task.to_string(), "2025-02-04  Draft: Essay on Ethics");
    }

    #[test]
    fn test_subtask_json_uses_date_string() {
        let task = SubTask::new("Submit", "Lab 3", date(2025, 3, 1));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["label"], "Submit: Lab 3");
        assert_eq!(json["date"], "2025-03-01");
    }

    #[test]
    fn test_default_sub_steps() {
        let steps = SubStepSequence::default();
        assert_eq!(steps.len(), 4);
        assert_eq!(
            steps.iter().collect::<Vec<_>>(),
            vec!["Research", "Draft", "Revise", "Submit"]
        );
    }

    #[test]
    fn test_sub_steps_from_str() {
        let steps: SubStepSequence = " Outline ,Draft,, Submit ".parse().unwrap();
        assert_eq!(steps.iter().collect::<Vec<_>>(), vec!["Outline", "Draft", "Submit"]);
        assert_eq!(steps.to_string(), "Outline, Draft, Submit");

        let empty: SubStepSequence = "".parse().unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_due_date_year_bounds() {
        assert!(is_valid_due_date(date(1, 1, 1)));
        assert!(is_valid_due_date(date(9999, 12, 31)));
        assert!(!is_valid_due_date(date(0, 1, 5)));
        assert!(!is_valid_due_date(date(10000, 1, 1)));
    }

    #[test]
    fn test_assignment_display() {
        let assignment = Assignment::new("Midterm", date(2025, 10, 3));
        assert_eq!(assignment.to_string(), "2025-10-03  Midterm");
    }
}
