//! Per-task action dispatch for triggered pull requests.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tasklink_asana::TaskTracker;
use tasklink_links::{
    extract_task_references, ExtractError, TaskExtraction, TaskLinkPattern, TaskReference,
};

use crate::dispatch_report::{ActionFailure, DispatchReport, TaskAction, TaskLinkOutcome};
use crate::pull_request_context::PullRequestContext;
use crate::task_link_config::TaskLinkConfig;

enum MoveResult {
    Moved,
    SkippedSubtask,
}

pub struct TaskDispatcher {
    config: TaskLinkConfig,
    tracker: Arc<dyn TaskTracker>,
    pattern: TaskLinkPattern,
}

impl TaskDispatcher {
    pub fn new(config: TaskLinkConfig, tracker: Arc<dyn TaskTracker>) -> Result<Self> {
        config.validate()?;
        let pattern = TaskLinkPattern::for_host(&config.link_host)
            .with_context(|| format!("invalid task link host '{}'", config.link_host))?;
        Ok(Self {
            config,
            tracker,
            pattern,
        })
    }

    /// Extract task references from the pull request and run the configured
    /// actions for each of them.
    ///
    /// A malformed link returns `Err` before any external call is made.
    /// Action failures never stop the loop; they are collected in the report.
    pub async fn run(
        &self,
        context: &PullRequestContext,
    ) -> std::result::Result<TaskLinkOutcome, ExtractError> {
        let extraction = extract_task_references(
            &context.description,
            &self.config.trigger_phrase,
            &self.pattern,
        )?;
        let references = match extraction {
            TaskExtraction::NotTriggered => {
                tracing::info!("Trigger phrase not matched in PR description");
                return Ok(TaskLinkOutcome::NotTriggered);
            }
            TaskExtraction::NoTasks => {
                tracing::info!("No tasks found in PR description");
                return Ok(TaskLinkOutcome::NoTasks);
            }
            TaskExtraction::Tasks(references) => references,
        };
        if !self.config.has_actions() {
            tracing::warn!(
                tasks = references.len(),
                "no task-comment, target-section or mark-complete configured"
            );
        }

        let mut report = DispatchReport::default();
        for reference in &references {
            self.dispatch_task(reference, &context.url, &mut report).await;
            report.tasks_processed = report.tasks_processed.saturating_add(1);
        }
        tracing::debug!(
            tasks = report.tasks_processed,
            succeeded = report.actions_succeeded,
            failed = report.failures.len(),
            "task dispatch finished"
        );
        Ok(TaskLinkOutcome::Dispatched(report))
    }

    async fn dispatch_task(
        &self,
        reference: &TaskReference,
        pr_url: &str,
        report: &mut DispatchReport,
    ) {
        let task_id = reference.task_id.as_str();

        if let Some(comment) = self.config.task_comment.as_deref() {
            let text = format!("{comment}{pr_url}");
            match self.tracker.create_task_comment(task_id, &text).await {
                Ok(()) => {
                    tracing::info!("Comment added to task {task_id}");
                    report.actions_succeeded = report.actions_succeeded.saturating_add(1);
                }
                Err(error) => record_failure(
                    report,
                    task_id,
                    TaskAction::Comment,
                    format!("Failed to add comment to task {task_id}"),
                    &error,
                ),
            }
        }

        if let Some(section_name) = self.config.target_section.as_deref() {
            match self.move_task(reference, section_name).await {
                Ok(MoveResult::Moved) => {
                    tracing::info!("Task {task_id} moved to {section_name}");
                    report.actions_succeeded = report.actions_succeeded.saturating_add(1);
                }
                Ok(MoveResult::SkippedSubtask) => {
                    tracing::debug!(task_id, "sub-task left in place");
                    report.subtasks_skipped = report.subtasks_skipped.saturating_add(1);
                }
                Err(error) => record_failure(
                    report,
                    task_id,
                    TaskAction::Move,
                    format!("Failed to move task {task_id} to {section_name}"),
                    &error,
                ),
            }
        }

        if self.config.mark_complete {
            match self.tracker.mark_task_complete(task_id).await {
                Ok(()) => {
                    tracing::info!("Task {task_id} marked as complete");
                    report.actions_succeeded = report.actions_succeeded.saturating_add(1);
                }
                Err(error) => record_failure(
                    report,
                    task_id,
                    TaskAction::Complete,
                    format!("Failed to mark task {task_id} as complete"),
                    &error,
                ),
            }
        }
    }

    async fn move_task(&self, reference: &TaskReference, section_name: &str) -> Result<MoveResult> {
        let sections = self
            .tracker
            .list_project_sections(&reference.project_id)
            .await?;
        let task = self.tracker.get_task(&reference.task_id).await?;
        if task.is_subtask() {
            return Ok(MoveResult::SkippedSubtask);
        }
        let section = sections
            .iter()
            .find(|section| section.name == section_name)
            .ok_or_else(|| {
                anyhow!(
                    "section '{section_name}' not found in project {}",
                    reference.project_id
                )
            })?;
        self.tracker
            .add_task_to_section(&section.gid, &reference.task_id)
            .await?;
        Ok(MoveResult::Moved)
    }
}

fn record_failure(
    report: &mut DispatchReport,
    task_id: &str,
    action: TaskAction,
    message: String,
    error: &anyhow::Error,
) {
    let cause = format!("{error:#}");
    tracing::error!(task_id, action = action.as_str(), cause = %cause, "{message}");
    report.failures.push(ActionFailure {
        task_id: task_id.to_string(),
        action,
        message,
        cause,
    });
}
