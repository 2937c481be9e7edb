//! JSON extraction from raw model output
//!
//! Model responses are untrusted text: sometimes pure JSON, sometimes JSON
//! inside a fenced code block, sometimes JSON buried in prose. Strategies
//! are tried in that order; the first parse that succeeds wins. No parse
//! error escapes this module.

/// Recover a single JSON value from arbitrary model output.
///
/// Returns `None` when none of the strategies produce parseable JSON.
pub fn extract_json(text: &str) -> Option<serde_json::Value> {
    whole_text(text)
        .or_else(|| fenced_block(text))
        .or_else(|| brace_span(text))
}

/// Strategy 1: the entire response is a JSON value.
fn whole_text(text: &str) -> Option<serde_json::Value> {
    serde_json::from_str(text.trim()).ok()
}

/// Strategy 2: JSON inside a triple-backtick fence, optionally tagged `json`.
fn fenced_block(text: &str) -> Option<serde_json::Value> {
    let start = text.find("```")?;
    let interior = &text[start + 3..];
    let interior = interior.strip_prefix("json").unwrap_or(interior);
    let end = interior.find("```")?;
    serde_json::from_str(interior[..end].trim()).ok()
}

/// Strategy 3: the first `{` through the last `}` anywhere in the text.
fn brace_span(text: &str) -> Option<serde_json::Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(text[start..=end].trim()).ok()
}
