//! Tweet lookup tool with union-shaped identifier input.
//!
//! The caller may pass a single tweet ID or a list of IDs. The input
//! classifies into a tagged variant during validation; the dispatcher then
//! takes the singular or batch upstream path explicitly.

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

use crate::domains::tools::common::{failure_result, json_result};
use crate::upstream::{TweetReadFields, XApi};

/// A single tweet ID or an array of tweet IDs.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TweetIds {
    One(String),
    Many(Vec<String>),
}

/// Parameters for the get-tweets tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTweetsParams {
    /// A single tweet ID or an array of tweet IDs.
    pub tweet_ids: TweetIds,
}

/// Fetch one or more tweets by their IDs.
pub struct GetTweetsTool;

impl GetTweetsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-tweets";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get one or more tweets by their IDs";

    /// Execute the tool logic.
    pub async fn execute(params: &GetTweetsParams, api: &dyn XApi) -> CallToolResult {
        let fields = TweetReadFields::default();
        match &params.tweet_ids {
            TweetIds::One(id) => {
                info!(tweet_id = %id, "Fetching tweet");
                match api.tweet(id, &fields).await {
                    Ok(tweet) => json_result("fetching tweets", &tweet),
                    Err(e) => failure_result("fetching tweets", &e),
                }
            }
            TweetIds::Many(ids) => {
                info!(count = ids.len(), "Fetching tweet batch");
                match api.tweets(ids, &fields).await {
                    Ok(tweets) => json_result("fetching tweets", &tweets),
                    Err(e) => failure_result("fetching tweets", &e),
                }
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetTweetsParams>(),
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
                let params: GetTweetsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
