use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enumerates supported `TaskAction` values, in dispatch order.
pub enum TaskAction {
    Comment,
    Move,
    Complete,
}

impl TaskAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskAction::Comment => "comment",
            TaskAction::Move => "move",
            TaskAction::Complete => "complete",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One failed action. `message` is the user-facing status line; `cause` keeps
/// the underlying error chain for logs.
pub struct ActionFailure {
    pub task_id: String,
    pub action: TaskAction,
    pub message: String,
    pub cause: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub tasks_processed: usize,
    pub actions_succeeded: usize,
    pub subtasks_skipped: usize,
    pub failures: Vec<ActionFailure>,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Terminal result of a run that did not halt on a malformed link.
pub enum TaskLinkOutcome {
    NotTriggered,
    NoTasks,
    Dispatched(DispatchReport),
}

impl TaskLinkOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            TaskLinkOutcome::NotTriggered | TaskLinkOutcome::NoTasks => true,
            TaskLinkOutcome::Dispatched(report) => report.is_success(),
        }
    }

    pub fn failures(&self) -> &[ActionFailure] {
        match self {
            TaskLinkOutcome::Dispatched(report) => &report.failures,
            _ => &[],
        }
    }
}
