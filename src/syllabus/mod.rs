//! Syllabus module
//!
//! Turns syllabus text into a study plan:
//! - Find `Mon D, YYYY  Title` deadline lines
//! - Spread each assignment's sub-steps across the days before it is due

pub mod decompose;
pub mod model;
pub mod parser;

pub use decompose::{break_down_default, break_down_task, decompose_all};
pub use model::{
    is_valid_due_date, Assignment, SubStepSequence, SubTask, DATE_FORMAT, DEFAULT_SUB_STEPS,
    DUE_YEARS,
};
pub use parser::extract_tasks;
