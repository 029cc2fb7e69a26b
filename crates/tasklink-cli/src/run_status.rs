//! CI status signaling for terminal run outcomes.

use tasklink_runtime::TaskLinkOutcome;

/// Render a GitHub Actions `::error::` workflow command for `message`.
pub(crate) fn render_error_annotation(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}

pub(crate) fn report_fatal(message: &str) {
    println!("{}", render_error_annotation(message));
}

/// Emit one annotation per failed action; returns whether the run succeeded.
pub(crate) fn report_outcome(outcome: &TaskLinkOutcome) -> bool {
    for failure in outcome.failures() {
        report_fatal(&failure.message);
    }
    outcome.is_success()
}

#[cfg(test)]
mod tests {
    use tasklink_runtime::{ActionFailure, DispatchReport, TaskAction, TaskLinkOutcome};

    use super::{render_error_annotation, report_outcome};

    #[test]
    fn unit_render_error_annotation_escapes_workflow_command_characters() {
        assert_eq!(
            render_error_annotation("100% failed\r\nnext"),
            "::error::100%25 failed%0D%0Anext"
        );
    }

    #[test]
    fn functional_report_outcome_reflects_failures() {
        assert!(report_outcome(&TaskLinkOutcome::NotTriggered));
        let outcome = TaskLinkOutcome::Dispatched(DispatchReport {
            tasks_processed: 1,
            actions_succeeded: 0,
            subtasks_skipped: 0,
            failures: vec![ActionFailure {
                task_id: "789".to_string(),
                action: TaskAction::Complete,
                message: "Failed to mark task 789 as complete".to_string(),
                cause: "status 500".to_string(),
            }],
        });
        assert!(!report_outcome(&outcome));
    }
}
