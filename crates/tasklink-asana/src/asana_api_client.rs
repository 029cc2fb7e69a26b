//! Asana REST API client used by the task dispatcher.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::asana_types::{AsanaDataEnvelope, AsanaPageEnvelope, AsanaSection, AsanaTask};
use crate::task_tracker::TaskTracker;
use crate::transport_helpers::describe_error_body;

pub const DEFAULT_ASANA_API_BASE: &str = "https://app.asana.com/api/1.0";
const SECTIONS_PAGE_LIMIT: &str = "100";
const ERROR_BODY_MAX_CHARS: usize = 800;

#[derive(Debug, Clone)]
/// Connection settings for `AsanaApiClient`.
pub struct AsanaConfig {
    pub api_base: String,
    pub token: String,
    pub request_timeout_ms: Option<u64>,
}

#[derive(Clone)]
pub struct AsanaApiClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl std::fmt::Debug for AsanaApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsanaApiClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl AsanaApiClient {
    pub fn new(config: AsanaConfig) -> Result<Self> {
        let token = config.token.trim();
        if token.is_empty() {
            bail!("asana personal access token is empty");
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("tasklink"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout_ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms.max(1)));
        }
        let http = builder.build().context("failed to create asana api client")?;

        Ok(Self {
            http,
            api_base: config.api_base.trim().trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn send_checked(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response> {
        tracing::debug!(operation, "asana api request");
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("asana api {operation} request failed"))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        bail!(
            "asana api {operation} failed with status {}: {}",
            status.as_u16(),
            describe_error_body(&body, ERROR_BODY_MAX_CHARS)
        );
    }

    async fn request_json<T>(&self, operation: &str, request: reqwest::RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send_checked(operation, request)
            .await?
            .json::<T>()
            .await
            .with_context(|| format!("failed to decode asana {operation} response"))
    }
}

#[async_trait]
impl TaskTracker for AsanaApiClient {
    async fn list_project_sections(&self, project_id: &str) -> Result<Vec<AsanaSection>> {
        let mut sections = Vec::new();
        let mut offset: Option<String> = None;
        loop {
            let mut request = self
                .http
                .get(format!("{}/projects/{project_id}/sections", self.api_base))
                .query(&[("limit", SECTIONS_PAGE_LIMIT)]);
            if let Some(offset) = offset.as_deref() {
                request = request.query(&[("offset", offset)]);
            }
            let page: AsanaPageEnvelope<AsanaSection> =
                self.request_json("list project sections", request).await?;
            sections.extend(page.data);
            match page.next_page {
                Some(next) if !next.offset.is_empty() => offset = Some(next.offset),
                _ => break,
            }
        }
        Ok(sections)
    }

    async fn get_task(&self, task_id: &str) -> Result<AsanaTask> {
        let request = self
            .http
            .get(format!("{}/tasks/{task_id}", self.api_base))
            .query(&[("opt_fields", "parent")]);
        let envelope: AsanaDataEnvelope<AsanaTask> =
            self.request_json("get task", request).await?;
        Ok(envelope.data)
    }

    async fn add_task_to_section(&self, section_id: &str, task_id: &str) -> Result<()> {
        let payload = json!({ "data": { "task": task_id } });
        let request = self
            .http
            .post(format!("{}/sections/{section_id}/addTask", self.api_base))
            .json(&payload);
        self.send_checked("add task to section", request).await?;
        Ok(())
    }

    async fn create_task_comment(&self, task_id: &str, text: &str) -> Result<()> {
        let payload = json!({ "data": { "text": text } });
        let request = self
            .http
            .post(format!("{}/tasks/{task_id}/stories", self.api_base))
            .json(&payload);
        let _story: AsanaDataEnvelope<Value> =
            self.request_json("create task comment", request).await?;
        Ok(())
    }

    async fn mark_task_complete(&self, task_id: &str) -> Result<()> {
        let payload = json!({ "data": { "completed": true } });
        let request = self
            .http
            .put(format!("{}/tasks/{task_id}", self.api_base))
            .json(&payload);
        let _task: AsanaDataEnvelope<Value> = self.request_json("update task", request).await?;
        Ok(())
    }
}
