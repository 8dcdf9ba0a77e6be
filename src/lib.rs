//! ClassRadar library - syllabus deadlines to a scheduled study plan

pub mod cli;
pub mod config;
pub mod extract;
pub mod heatmap;
pub mod pipeline;
pub mod syllabus;
pub mod todoist;
