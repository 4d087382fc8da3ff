//! Bookmark toggle tool (add or delete in one tool).

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::common::{failure_result, text_result};
use crate::upstream::XApi;

/// Parameters for the add-delete-bookmark tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkParams {
    /// The ID of the tweet to bookmark or delete the bookmark for.
    pub tweet_id: String,

    /// True to bookmark the tweet, false to delete the bookmark.
    pub is_add_bookmark: bool,
}

/// Add or delete a bookmark for a specific tweet.
pub struct BookmarkTool;

impl BookmarkTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add-delete-bookmark";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add or delete a bookmark for a specific tweet";

    /// Execute the tool logic.
    pub async fn execute(params: &BookmarkParams, api: &dyn XApi) -> CallToolResult {
        info!(tweet_id = %params.tweet_id, add = params.is_add_bookmark, "Toggling bookmark");
        let outcome = if params.is_add_bookmark {
            api.bookmark(&params.tweet_id).await
        } else {
            api.remove_bookmark(&params.tweet_id).await
        };

        // Phrase the outcome from the state the upstream reports.
        match outcome {
            Ok(bookmarked) if params.is_add_bookmark => {
                if bookmarked {
                    text_result(format!(
                        "Tweet {} bookmarked successfully!",
                        params.tweet_id
                    ))
                } else {
                    text_result(format!("Failed to bookmark tweet {}", params.tweet_id))
                }
            }
            Ok(bookmarked) => {
                if !bookmarked {
                    text_result(format!(
                        "Bookmark for tweet {} deleted successfully!",
                        params.tweet_id
                    ))
                } else {
                    text_result(format!(
                        "Failed to delete bookmark for tweet {}",
                        params.tweet_id
                    ))
                }
            }
            Err(e) => failure_result("toggling bookmark", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<BookmarkParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the shared client handle.
    pub fn create_route<S>(api: Arc<dyn XApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let api = api.clone();
            async move {
                let params: BookmarkParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::common::envelope_text;
    use crate::upstream::mock::RecordingApi;

    fn params(add: bool) -> BookmarkParams {
        BookmarkParams {
            tweet_id: "88".to_string(),
            is_add_bookmark: add,
        }
    }

    #[test]
    fn test_add_bookmark_success() {
        let api = RecordingApi::new();
        let result = tokio_test::block_on(BookmarkTool::execute(&params(true), &api));
        assert_eq!(envelope_text(&result), "Tweet 88 bookmarked successfully!");
        assert_eq!(api.ops(), vec!["bookmark"]);
    }

    #[test]
    fn test_delete_bookmark_success() {
        let api = RecordingApi::new();
        let result = tokio_test::block_on(BookmarkTool::execute(&params(false), &api));
        assert_eq!(
            envelope_text(&result),
            "Bookmark for tweet 88 deleted successfully!"
        );
        assert_eq!(api.ops(), vec!["remove_bookmark"]);
    }

    #[test]
    fn test_add_bookmark_not_effective_states_failure() {
        let api = RecordingApi::with_toggle_effective(false);
        let result = tokio_test::block_on(BookmarkTool::execute(&params(true), &api));
        assert_eq!(envelope_text(&result), "Failed to bookmark tweet 88");
    }

    #[test]
    fn test_delete_bookmark_not_effective_states_failure() {
        let api = RecordingApi::with_toggle_effective(false);
        let result = tokio_test::block_on(BookmarkTool::execute(&params(false), &api));
        assert_eq!(
            envelope_text(&result),
            "Failed to delete bookmark for tweet 88"
        );
    }

    #[test]
    fn test_bookmark_upstream_failure() {
        let api = RecordingApi::failing("not found");
        let result = tokio_test::block_on(BookmarkTool::execute(&params(true), &api));
        let text = envelope_text(&result);
        assert!(text.contains("Error toggling bookmark"));
        assert!(text.contains("not found"));
    }
}
