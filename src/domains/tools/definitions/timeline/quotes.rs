//! Quote tweets tool.

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

use crate::domains::tools::common::{default_max_results, failure_result, json_result};
use crate::upstream::{TimelineQuery, XApi};

/// Parameters for the get-quoted-tweets tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetQuotedTweetsParams {
    /// The ID of the tweet whose quotes to fetch.
    pub tweet_id: String,

    /// Maximum number of results to return (default: 10).
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

/// Fetch tweets quoting a specific tweet.
pub struct GetQuotedTweetsTool;

impl GetQuotedTweetsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-quoted-tweets";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get tweets that quote a specific tweet";

    /// Execute the tool logic.
    pub async fn execute(params: &GetQuotedTweetsParams, api: &dyn XApi) -> CallToolResult {
        info!(tweet_id = %params.tweet_id, "Fetching quote tweets");
        let query = TimelineQuery::new(params.max_results, None);
        match api.quote_tweets(&params.tweet_id, query).await {
            Ok(page) => json_result("fetching quote tweets", &page),
            Err(e) => failure_result("fetching quote tweets", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetQuotedTweetsParams>(),
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
                let params: GetQuotedTweetsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
