use anyhow::Result;
use async_trait::async_trait;

use crate::asana_types::{AsanaSection, AsanaTask};

#[async_trait]
/// Trait contract for the task-tracker calls the dispatcher performs.
///
/// Every method is one authenticated external call.
pub trait TaskTracker: Send + Sync {
    async fn list_project_sections(&self, project_id: &str) -> Result<Vec<AsanaSection>>;

    async fn get_task(&self, task_id: &str) -> Result<AsanaTask>;

    async fn add_task_to_section(&self, section_id: &str, task_id: &str) -> Result<()>;

    async fn create_task_comment(&self, task_id: &str, text: &str) -> Result<()>;

    async fn mark_task_complete(&self, task_id: &str) -> Result<()>;
}
