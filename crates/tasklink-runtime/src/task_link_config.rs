use anyhow::{bail, Result};
use tasklink_asana::DEFAULT_ASANA_API_BASE;
use tasklink_links::DEFAULT_LINK_HOST;

#[derive(Clone)]
/// Immutable run configuration, built once at startup.
pub struct TaskLinkConfig {
    pub asana_token: String,
    pub trigger_phrase: String,
    pub task_comment: Option<String>,
    pub target_section: Option<String>,
    pub mark_complete: bool,
    pub asana_api_base: String,
    pub link_host: String,
    pub request_timeout_ms: Option<u64>,
}

impl std::fmt::Debug for TaskLinkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskLinkConfig")
            .field("asana_token", &"<redacted>")
            .field("trigger_phrase", &self.trigger_phrase)
            .field("task_comment", &self.task_comment)
            .field("target_section", &self.target_section)
            .field("mark_complete", &self.mark_complete)
            .field("asana_api_base", &self.asana_api_base)
            .field("link_host", &self.link_host)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

impl TaskLinkConfig {
    /// Configuration with only the required inputs set and every action disabled.
    pub fn new(asana_token: impl Into<String>, trigger_phrase: impl Into<String>) -> Self {
        Self {
            asana_token: asana_token.into(),
            trigger_phrase: trigger_phrase.into(),
            task_comment: None,
            target_section: None,
            mark_complete: false,
            asana_api_base: DEFAULT_ASANA_API_BASE.to_string(),
            link_host: DEFAULT_LINK_HOST.to_string(),
            request_timeout_ms: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.asana_token.trim().is_empty() {
            bail!("Input required and not supplied: asana-pat");
        }
        if self.trigger_phrase.is_empty() {
            bail!("Input required and not supplied: trigger-phrase");
        }
        Ok(())
    }

    pub fn has_actions(&self) -> bool {
        self.task_comment.is_some() || self.target_section.is_some() || self.mark_complete
    }
}

/// Unset CI inputs arrive as empty strings; treat those as absent.
pub fn non_empty_input(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Only the literal text `true` enables the flag.
pub fn parse_mark_complete_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

#[cfg(test)]
mod tests {
    use super::{non_empty_input, parse_mark_complete_flag, TaskLinkConfig};

    #[test]
    fn unit_parse_mark_complete_flag_accepts_only_literal_true() {
        assert!(parse_mark_complete_flag(Some("true")));
        assert!(!parse_mark_complete_flag(Some("TRUE")));
        assert!(!parse_mark_complete_flag(Some("yes")));
        assert!(!parse_mark_complete_flag(Some("")));
        assert!(!parse_mark_complete_flag(None));
    }

    #[test]
    fn unit_non_empty_input_drops_empty_values_and_keeps_spacing() {
        assert_eq!(non_empty_input(Some(String::new())), None);
        assert_eq!(non_empty_input(None), None);
        assert_eq!(
            non_empty_input(Some("See PR: ".to_string())).as_deref(),
            Some("See PR: ")
        );
    }

    #[test]
    fn functional_new_config_disables_all_actions() {
        let config = TaskLinkConfig::new("pat", "Ready for QA");
        assert!(!config.has_actions());
        assert_eq!(config.link_host, "app.asana.com");
        assert_eq!(config.asana_api_base, "https://app.asana.com/api/1.0");
        config.validate().expect("valid config");
    }

    #[test]
    fn regression_validate_rejects_missing_required_inputs() {
        let error = TaskLinkConfig::new("  ", "Ready")
            .validate()
            .expect_err("missing token");
        assert!(error.to_string().contains("asana-pat"));

        let error = TaskLinkConfig::new("pat", "")
            .validate()
            .expect_err("missing trigger");
        assert!(error.to_string().contains("trigger-phrase"));
    }

    #[test]
    fn regression_debug_output_redacts_token() {
        let rendered = format!("{:?}", TaskLinkConfig::new("secret-pat", "Ready"));
        assert!(!rendered.contains("secret-pat"));
        assert!(rendered.contains("<redacted>"));
    }
}
