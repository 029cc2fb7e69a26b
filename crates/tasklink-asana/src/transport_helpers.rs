use crate::asana_types::AsanaErrorEnvelope;

pub(crate) fn truncate_for_error(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated = text.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}

/// Prefer the first Asana `errors[].message`; fall back to the raw body.
pub(crate) fn describe_error_body(body: &str, max_chars: usize) -> String {
    let message = serde_json::from_str::<AsanaErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.errors.into_iter().next())
        .map(|entry| entry.message)
        .filter(|message| !message.trim().is_empty());
    truncate_for_error(message.as_deref().unwrap_or(body), max_chars)
}
