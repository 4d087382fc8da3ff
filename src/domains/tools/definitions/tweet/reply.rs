//! Reply posting tool.

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
use crate::upstream::{ReplyTarget, TweetRequest, XApi};

/// Parameters for the reply-to-tweet tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplyTweetParams {
    /// The text content of the reply.
    pub text: String,

    /// The ID of the tweet to reply to.
    pub tweet_id: String,
}

/// Post a reply to a specific tweet.
pub struct ReplyTweetTool;

impl ReplyTweetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "reply-to-tweet";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Reply to a specific tweet";

    /// Execute the tool logic.
    pub async fn execute(params: &ReplyTweetParams, api: &dyn XApi) -> CallToolResult {
        info!(tweet_id = %params.tweet_id, "Posting reply");
        let request = TweetRequest {
            reply: Some(ReplyTarget {
                in_reply_to_tweet_id: params.tweet_id.clone(),
            }),
            ..TweetRequest::text(&params.text)
        };
        match api.post_tweet(request).await {
            Ok(tweet) => text_result(format!("Reply posted successfully! Reply ID: {}", tweet.id)),
            Err(e) => failure_result("posting reply", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ReplyTweetParams>(),
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
                let params: ReplyTweetParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
