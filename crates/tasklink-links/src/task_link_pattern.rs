use regex::Regex;
use thiserror::Error;

/// Host recognised in task links when no override is configured.
pub const DEFAULT_LINK_HOST: &str = "app.asana.com";
const SUPPORTED_URL_VERSION: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated project/task identifier pair taken from one task link.
pub struct TaskReference {
    pub project_id: String,
    pub task_id: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Malformed task links. Any of these halts the whole run before dispatch.
pub enum ExtractError {
    #[error("Unsupported Asana URL version")]
    UnsupportedUrlVersion { version: String },
    #[error("No project ID found in PR description")]
    MissingProjectId,
    #[error("No task ID found in PR description")]
    MissingTaskId,
}

#[derive(Debug, Clone)]
/// Compiled matcher for `https://<host>/<version>/<workspace>[/project/<id>][/task/<id>]`
/// links, optionally wrapped in Markdown `[label](...)` syntax.
pub struct TaskLinkPattern {
    regex: Regex,
}

impl TaskLinkPattern {
    pub fn for_host(host: &str) -> Result<Self, regex::Error> {
        let pattern = format!(
            r"(?:\[(?P<label>.*?)\]\()?(?P<url>https://{host}/(?P<url_version>[0-9]+)/(?P<workspace_id>[0-9]+)(?:/project/(?P<project_id>[0-9]+))?(?:/task/(?P<task_id>[0-9]+))?)\)?",
            host = regex::escape(host)
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Collect task references from `window` left to right.
    ///
    /// The first invalid link aborts extraction; references gathered before
    /// it are discarded with the error.
    pub fn extract(&self, window: &str) -> Result<Vec<TaskReference>, ExtractError> {
        let mut references = Vec::new();
        for captures in self.regex.captures_iter(window) {
            let version = captures
                .name("url_version")
                .map(|value| value.as_str())
                .unwrap_or_default();
            if version != SUPPORTED_URL_VERSION {
                return Err(ExtractError::UnsupportedUrlVersion {
                    version: version.to_string(),
                });
            }
            let project_id = captures
                .name("project_id")
                .ok_or(ExtractError::MissingProjectId)?;
            let task_id = captures
                .name("task_id")
                .ok_or(ExtractError::MissingTaskId)?;
            references.push(TaskReference {
                project_id: project_id.as_str().to_string(),
                task_id: task_id.as_str().to_string(),
            });
        }
        Ok(references)
    }
}
