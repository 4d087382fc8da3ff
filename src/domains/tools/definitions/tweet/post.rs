//! Plain tweet posting tool.

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

/// Parameters for the post-tweet tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PostTweetParams {
    /// The text content of the tweet.
    pub content: String,
}

/// Post a plain tweet with no modifiers.
pub struct PostTweetTool;

impl PostTweetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "post-tweet";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Post a tweet with the specified content";

    /// Execute the tool logic.
    pub async fn execute(params: &PostTweetParams, api: &dyn XApi) -> CallToolResult {
        info!("Posting tweet");
        match api.post_tweet(TweetRequest::text(&params.content)).await {
            Ok(tweet) => text_result(format!("Tweet posted successfully! Tweet ID: {}", tweet.id)),
            Err(e) => failure_result("posting tweet", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PostTweetParams>(),
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
                let params: PostTweetParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
