//! Commit message post-processing.

use crate::constants::llm::FALLBACK_COMMIT_MESSAGE;

const FENCE: &str = "```";

/// Turns raw model output into the message that gets committed.
///
/// - missing or blank text becomes [`FALLBACK_COMMIT_MESSAGE`]
/// - an opening fence line (```` ``` ```` or ```` ```text ````) is dropped
/// - a closing fence is dropped
/// - surrounding whitespace is trimmed
///
/// # Example
/// ```
/// use shipit::llm::message::clean_commit_message;
///
/// assert_eq!(clean_commit_message(Some("```\nFix bug\n```")), "Fix bug");
/// assert_eq!(clean_commit_message(None), "Auto-generated commit");
/// ```
pub fn clean_commit_message(raw: Option<&str>) -> String {
    let Some(text) = raw else {
        return FALLBACK_COMMIT_MESSAGE.to_string();
    };

    let mut body = text.trim();

    if body.starts_with(FENCE) {
        // 去掉整行开头 fence（可能带语言标记）
        body = match body.split_once('\n') {
            Some((_, rest)) => rest,
            None => body.trim_start_matches('`'),
        };
    }

    body = body.trim_end();
    if let Some(stripped) = body.strip_suffix(FENCE) {
        body = stripped;
    }

    let body = body.trim();
    if body.is_empty() {
        FALLBACK_COMMIT_MESSAGE.to_string()
    } else {
        body.to_string()
    }
}
