//! Thread posting tool.
//!
//! Accepts a sequence of items that are either plain text or a full
//! composition object. Items are normalized to the rich shape and submitted
//! as an ordered batch; order must be preserved for reply-chain linkage.

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
use crate::upstream::{TweetRequest, XApi};

/// One thread item: plain text or a full composition object.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ThreadItem {
    /// Plain tweet text, normalized to `{text}` before submission.
    Text(String),

    /// Full composition shape, submitted as-is.
    Draft(TweetRequest),
}

impl ThreadItem {
    /// Normalize to the rich request shape.
    pub fn into_request(self) -> TweetRequest {
        match self {
            Self::Text(text) => TweetRequest::text(text),
            Self::Draft(request) => request,
        }
    }
}

/// Parameters for the tweet-thread tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TweetThreadParams {
    /// An array of tweets to post as a thread.
    pub tweets: Vec<ThreadItem>,
}

/// Normalize the caller-supplied items into the ordered upstream batch.
pub fn build_batch(params: &TweetThreadParams) -> Vec<TweetRequest> {
    params
        .tweets
        .iter()
        .cloned()
        .map(ThreadItem::into_request)
        .collect()
}

/// Post a thread of tweets.
pub struct TweetThreadTool;

impl TweetThreadTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "tweet-thread";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Post a thread of tweets";

    /// Execute the tool logic.
    pub async fn execute(params: &TweetThreadParams, api: &dyn XApi) -> CallToolResult {
        info!(items = params.tweets.len(), "Posting thread");
        match api.post_thread(build_batch(params)).await {
            Ok(posted) => {
                let ids = posted
                    .iter()
                    .map(|t| t.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                text_result(format!("Thread posted successfully! Tweet IDs: {}", ids))
            }
            Err(e) => failure_result("posting thread", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TweetThreadParams>(),
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
                let params: TweetThreadParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
