//! Pull-request task bookkeeping runtime.
//!
//! Loads the pull-request context, drives task-link extraction and dispatches
//! the configured comment/move/complete actions against a `TaskTracker`.
mod dispatch_report;
mod pull_request_context;
mod task_dispatcher;
mod task_link_config;

pub use dispatch_report::{ActionFailure, DispatchReport, TaskAction, TaskLinkOutcome};
pub use pull_request_context::PullRequestContext;
pub use task_dispatcher::TaskDispatcher;
pub use task_link_config::{non_empty_input, parse_mark_complete_flag, TaskLinkConfig};
