/// Return the text following the first occurrence of `trigger_phrase`.
///
/// `None` means the description was not triggered. An empty trigger phrase
/// matches at the start, so the whole description becomes the window.
pub fn find_trigger_window<'a>(description: &'a str, trigger_phrase: &str) -> Option<&'a str> {
    description
        .split_once(trigger_phrase)
        .map(|(_before, after)| after)
}

#[cfg(test)]
mod tests {
    use super::find_trigger_window;

    #[test]
    fn unit_find_trigger_window_returns_none_without_phrase() {
        assert_eq!(find_trigger_window("nothing to see", "Ready for QA"), None);
    }

    #[test]
    fn unit_find_trigger_window_returns_text_after_first_occurrence() {
        let window = find_trigger_window("a Ready b Ready c", "Ready");
        assert_eq!(window, Some(" b Ready c"));
    }

    #[test]
    fn regression_find_trigger_window_is_case_sensitive() {
        assert_eq!(find_trigger_window("ready for qa", "Ready for QA"), None);
    }

    #[test]
    fn regression_find_trigger_window_empty_phrase_keeps_whole_description() {
        assert_eq!(find_trigger_window("abc", ""), Some("abc"));
    }

    #[test]
    fn unit_find_trigger_window_handles_multibyte_text() {
        let window = find_trigger_window("été → Ready: ✓", "Ready:");
        assert_eq!(window, Some(" ✓"));
    }
}
