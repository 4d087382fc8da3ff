//! Common helpers shared across tool definitions.
//!
//! Every tool returns the same envelope: exactly one text content block,
//! success-shaped regardless of outcome. Failures differ only in the text,
//! which names the operation and carries the upstream description; callers
//! parse the text to determine semantic success.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Default page size for paginated reads.
pub fn default_max_results() -> u32 {
    10
}

/// Wrap text in the single outbound envelope shape.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Convert a failure into the envelope, naming the operation.
pub fn failure_result(operation: &str, error: &dyn std::fmt::Display) -> CallToolResult {
    let text = format!("Error {}: {}", operation, error);
    warn!("{}", text);
    text_result(text)
}

/// Pretty-print a serializable value into the envelope.
pub fn json_result(operation: &str, value: &impl serde::Serialize) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => text_result(text),
        Err(e) => failure_result(operation, &e),
    }
}

/// Text of the single content block, for assertions in tests.
#[cfg(test)]
pub fn envelope_text(result: &CallToolResult) -> &str {
    assert_eq!(result.content.len(), 1, "envelope must hold one block");
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        other => panic!("expected text content, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_result_single_block() {
        let result = text_result("done");
        assert_eq!(result.content.len(), 1);
        assert_eq!(envelope_text(&result), "done");
    }

    #[test]
    fn test_failure_result_same_envelope_shape() {
        let ok = text_result("ok");
        let failed = failure_result("posting tweet", &"rate limited");
        assert_eq!(ok.content.len(), failed.content.len());
        assert_eq!(ok.is_error, failed.is_error);
        let text = envelope_text(&failed);
        assert!(text.contains("Error posting tweet"));
        assert!(text.contains("rate limited"));
    }
}
