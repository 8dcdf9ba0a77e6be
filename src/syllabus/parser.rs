//! Deadline extraction from syllabus text

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use super::model::{is_valid_due_date, Assignment};

/// Format of the date token, e.g. `Jan 5, 2025`
const SYLLABUS_DATE_FORMAT: &str = "%b %d, %Y";

// Date, at least two whitespace characters, then the title up to the newline:
// Feb 10, 2025   Essay on Ethics
static DEADLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]{3} \d{1,2}, \d{4})\s+\s+(.*?)\n").expect("deadline regex is valid")
});

/// Find every `Mon D, YYYY  Title` line in `text`.
///
/// Assignments come back in document order. Lines whose date token doesn't
/// parse as a real date (`Foo 3, 2025`, `Feb 30, 2025`, `Jan 5, 0000`) are
/// dropped without an error. A final line only counts if it ends with a newline.
pub fn extract_tasks(text: &str) -> Vec<Assignment> {
    DEADLINE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let date_str = caps[1].trim();
            match NaiveDate::parse_from_str(date_str, SYLLABUS_DATE_FORMAT) {
                Ok(due_date) if is_valid_due_date(due_date) => {
                    Some(Assignment::new(caps[2].trim(), due_date))
                }
                Ok(due_date) => {
                    trace!("Skipping deadline outside supported years: {}", due_date);
                    None
                }
                Err(e) => {
                    trace!("Skipping deadline with bad date {:?}: {}", date_str, e);
                    None
                }
            }
        })
        .collect()
}
