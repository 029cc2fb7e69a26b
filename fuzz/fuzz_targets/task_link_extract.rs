#![no_main]

use libfuzzer_sys::fuzz_target;
use tasklink_links::{
    extract_task_references, TaskExtraction, TaskLinkPattern, DEFAULT_LINK_HOST,
};

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let (trigger, description) = raw.split_once('\n').unwrap_or(("Ready", raw.as_ref()));
    let Ok(pattern) = TaskLinkPattern::for_host(DEFAULT_LINK_HOST) else {
        return;
    };
    if let Ok(TaskExtraction::Tasks(references)) =
        extract_task_references(description, trigger, &pattern)
    {
        assert!(!references.is_empty());
        for reference in references {
            assert!(reference.project_id.bytes().all(|byte| byte.is_ascii_digit()));
            assert!(reference.task_id.bytes().all(|byte| byte.is_ascii_digit()));
        }
    }
});
