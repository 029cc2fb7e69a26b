//! Asana task-tracker port and REST adapter.
//!
//! `TaskTracker` is the seam the dispatcher talks to; `AsanaApiClient` is the
//! production implementation backed by the Asana REST API.
mod asana_api_client;
mod asana_types;
mod task_tracker;
mod transport_helpers;

pub use asana_api_client::{AsanaApiClient, AsanaConfig, DEFAULT_ASANA_API_BASE};
pub use asana_types::{AsanaSection, AsanaTask, AsanaTaskParent};
pub use task_tracker::TaskTracker;
