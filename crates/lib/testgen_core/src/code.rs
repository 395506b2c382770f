//! Helpers for generated source text.

use chrono::Utc;

/// Pull Python source out of an LLM reply.
///
/// Returns the body of the first fenced block (plain or tagged `python`),
/// trimmed. Text without a complete fence is returned trimmed as-is.
pub fn extract_python_code(text: &str) -> String {
    const FENCE: &str = "```";

    let Some(start) = text.find(FENCE) else {
        return text.trim().to_string();
    };
    let after_fence = &text[start + FENCE.len()..];
    let Some(end) = after_fence.find(FENCE) else {
        return text.trim().to_string();
    };

    let mut body = &after_fence[..end];
    if body.get(..6).is_some_and(|tag| tag.eq_ignore_ascii_case("python")) {
        body = &body[6..];
    }
    body.strip_prefix('\n').unwrap_or(body).trim().to_string()
}

/// File name for saving generated code: `test_<unix millis>.py`.
pub fn default_file_name() -> String {
    format!("test_{}.py", Utc::now().timestamp_millis())
}
