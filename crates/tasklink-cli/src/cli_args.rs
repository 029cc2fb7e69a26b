use std::path::PathBuf;

use clap::Parser;
use tasklink_asana::DEFAULT_ASANA_API_BASE;
use tasklink_links::DEFAULT_LINK_HOST;
use tasklink_runtime::{non_empty_input, parse_mark_complete_flag, TaskLinkConfig};

#[derive(Debug, Parser)]
#[command(
    name = "tasklink",
    about = "Comment on, move and complete Asana tasks linked from a pull request",
    version
)]
pub(crate) struct Cli {
    #[arg(
        long = "asana-pat",
        env = "INPUT_ASANA-PAT",
        hide_env_values = true,
        help = "Asana personal access token"
    )]
    pub(crate) asana_pat: String,

    #[arg(
        long = "trigger-phrase",
        env = "INPUT_TRIGGER-PHRASE",
        help = "Phrase in the pull request description that activates task processing"
    )]
    pub(crate) trigger_phrase: String,

    #[arg(
        long = "task-comment",
        env = "INPUT_TASK-COMMENT",
        help = "Comment prefix posted to each task, followed by the pull request URL"
    )]
    pub(crate) task_comment: Option<String>,

    #[arg(
        long = "target-section",
        env = "INPUT_TARGET-SECTION",
        help = "Project section name each task is moved into"
    )]
    pub(crate) target_section: Option<String>,

    #[arg(
        long = "mark-complete",
        env = "INPUT_MARK-COMPLETE",
        help = "Mark each task complete when set to the text 'true'"
    )]
    pub(crate) mark_complete: Option<String>,

    #[arg(
        long = "event-path",
        env = "GITHUB_EVENT_PATH",
        help = "Path to the pull request event payload JSON"
    )]
    pub(crate) event_path: PathBuf,

    #[arg(
        long = "asana-api-base",
        env = "TASKLINK_ASANA_API_BASE",
        default_value = DEFAULT_ASANA_API_BASE,
        help = "Base URL for the Asana REST API"
    )]
    pub(crate) asana_api_base: String,

    #[arg(
        long = "link-host",
        env = "TASKLINK_LINK_HOST",
        default_value = DEFAULT_LINK_HOST,
        help = "Host recognised in task links"
    )]
    pub(crate) link_host: String,

    #[arg(
        long = "request-timeout-ms",
        env = "TASKLINK_REQUEST_TIMEOUT_MS",
        help = "Optional per-request timeout for Asana API calls"
    )]
    pub(crate) request_timeout_ms: Option<u64>,
}

impl Cli {
    pub(crate) fn task_link_config(&self) -> TaskLinkConfig {
        TaskLinkConfig {
            asana_token: self.asana_pat.clone(),
            trigger_phrase: self.trigger_phrase.clone(),
            task_comment: non_empty_input(self.task_comment.clone()),
            target_section: non_empty_input(self.target_section.clone()),
            mark_complete: parse_mark_complete_flag(self.mark_complete.as_deref()),
            asana_api_base: self.asana_api_base.clone(),
            link_host: self.link_host.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}
