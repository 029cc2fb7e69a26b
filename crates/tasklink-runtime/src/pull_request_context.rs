use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GithubEventPayload {
    #[serde(default)]
    pull_request: Option<GithubPullRequest>,
}

#[derive(Debug, Deserialize)]
struct GithubPullRequest {
    #[serde(default)]
    body: Option<String>,
    html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Description and URL of the pull request that triggered the run.
pub struct PullRequestContext {
    pub description: String,
    pub url: String,
}

impl PullRequestContext {
    pub fn from_event_payload(raw: &str) -> Result<Self> {
        let payload: GithubEventPayload =
            serde_json::from_str(raw).context("failed to decode github event payload")?;
        let pull_request = payload
            .pull_request
            .ok_or_else(|| anyhow!("event payload does not contain a pull_request"))?;
        Ok(Self {
            description: pull_request.body.unwrap_or_default(),
            url: pull_request.html_url,
        })
    }

    pub fn load_from_event_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read event payload {}", path.display()))?;
        Self::from_event_payload(&raw)
            .with_context(|| format!("invalid event payload {}", path.display()))
    }
}
