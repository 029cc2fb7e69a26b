//! Task-link extraction for pull-request descriptions.
//!
//! This crate finds the trigger phrase in a description and turns every Asana
//! task link that follows it into a validated `TaskReference`.

pub mod task_extraction;
pub mod task_link_pattern;
pub mod trigger_window;

pub use task_extraction::{extract_task_references, TaskExtraction};
pub use task_link_pattern::{ExtractError, TaskLinkPattern, TaskReference, DEFAULT_LINK_HOST};
pub use trigger_window::find_trigger_window;
