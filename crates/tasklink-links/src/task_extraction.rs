use crate::task_link_pattern::{ExtractError, TaskLinkPattern, TaskReference};
use crate::trigger_window::find_trigger_window;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Enumerates supported `TaskExtraction` values.
pub enum TaskExtraction {
    NotTriggered,
    NoTasks,
    Tasks(Vec<TaskReference>),
}

/// Find the trigger phrase in `description` and extract the task references
/// that follow it. Links before the trigger phrase are never considered.
pub fn extract_task_references(
    description: &str,
    trigger_phrase: &str,
    pattern: &TaskLinkPattern,
) -> Result<TaskExtraction, ExtractError> {
    let Some(window) = find_trigger_window(description, trigger_phrase) else {
        return Ok(TaskExtraction::NotTriggered);
    };
    let references = pattern.extract(window)?;
    if references.is_empty() {
        return Ok(TaskExtraction::NoTasks);
    }
    Ok(TaskExtraction::Tasks(references))
}

#[cfg(test)]
mod tests {
    use super::{extract_task_references, TaskExtraction};
    use crate::task_link_pattern::{
        ExtractError, TaskLinkPattern, TaskReference, DEFAULT_LINK_HOST,
    };

    fn asana_pattern() -> TaskLinkPattern {
        TaskLinkPattern::for_host(DEFAULT_LINK_HOST).expect("pattern")
    }

    #[test]
    fn unit_extract_task_references_reports_not_triggered() {
        let extraction = extract_task_references(
            "https://app.asana.com/1/123/project/456/task/789",
            "Ready for QA",
            &asana_pattern(),
        )
        .expect("extract");
        assert_eq!(extraction, TaskExtraction::NotTriggered);
    }

    #[test]
    fn unit_extract_task_references_reports_no_tasks_after_trigger() {
        let extraction =
            extract_task_references("Ready for QA: soon", "Ready for QA", &asana_pattern())
                .expect("extract");
        assert_eq!(extraction, TaskExtraction::NoTasks);
    }

    #[test]
    fn functional_extract_task_references_reads_qa_scenario() {
        let extraction = extract_task_references(
            "Ready for QA: https://app.asana.com/1/123/project/456/task/789",
            "Ready for QA",
            &asana_pattern(),
        )
        .expect("extract");
        assert_eq!(
            extraction,
            TaskExtraction::Tasks(vec![TaskReference {
                project_id: "456".to_string(),
                task_id: "789".to_string(),
            }])
        );
    }

    #[test]
    fn regression_extract_task_references_ignores_links_before_trigger() {
        let description = "Related: https://app.asana.com/1/1/project/2/task/3\n\
                           Closes: https://app.asana.com/1/1/project/4/task/5";
        let extraction =
            extract_task_references(description, "Closes:", &asana_pattern()).expect("extract");
        assert_eq!(
            extraction,
            TaskExtraction::Tasks(vec![TaskReference {
                project_id: "4".to_string(),
                task_id: "5".to_string(),
            }])
        );
    }

    #[test]
    fn regression_extract_task_references_ignores_invalid_links_before_trigger() {
        let description = "Old: https://app.asana.com/0/1/2\nCloses:";
        let extraction =
            extract_task_references(description, "Closes:", &asana_pattern()).expect("extract");
        assert_eq!(extraction, TaskExtraction::NoTasks);
    }

    #[test]
    fn regression_extract_task_references_halts_on_missing_task_segment() {
        let error = extract_task_references(
            "Ready for QA: https://app.asana.com/1/123/project/456",
            "Ready for QA",
            &asana_pattern(),
        )
        .expect_err("missing task");
        assert_eq!(error, ExtractError::MissingTaskId);
    }
}
