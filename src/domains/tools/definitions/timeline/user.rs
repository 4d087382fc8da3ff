//! User timeline tool.

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
use crate::domains::tools::ToolError;
use crate::upstream::{Exclusion, TimelineQuery, XApi};

/// Upstream cap on how far back a user timeline read may reach.
const MAX_TIMELINE_RESULTS: u32 = 3200;

/// Parameters for the get-user-timeline tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserTimelineParams {
    /// The X user ID whose timeline to fetch.
    pub user_id: String,

    /// Maximum number of results to return (default: 10, max: 3200).
    #[serde(default = "default_max_results")]
    #[schemars(range(min = 1, max = 3200))]
    pub max_results: u32,

    /// Whether to exclude replies.
    #[serde(default)]
    pub exclude_replies: bool,

    /// Whether to exclude retweets.
    #[serde(default)]
    pub exclude_retweets: bool,
}

/// Validate the result cap and build the timeline query.
pub fn build_query(params: &UserTimelineParams) -> Result<TimelineQuery, ToolError> {
    if params.max_results > MAX_TIMELINE_RESULTS {
        return Err(ToolError::invalid_arguments(format!(
            "maxResults must be at most {MAX_TIMELINE_RESULTS}, got {}",
            params.max_results
        )));
    }
    Ok(TimelineQuery::new(
        params.max_results,
        Exclusion::compose(params.exclude_replies, params.exclude_retweets),
    ))
}

/// Fetch recent tweets from a specific user's timeline.
pub struct GetUserTimelineTool;

impl GetUserTimelineTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-user-timeline";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get tweets from a specific X user's timeline";

    /// Execute the tool logic.
    pub async fn execute(params: &UserTimelineParams, api: &dyn XApi) -> CallToolResult {
        info!(user_id = %params.user_id, max_results = params.max_results, "Fetching user timeline");
        let query = match build_query(params) {
            Ok(query) => query,
            Err(e) => return failure_result("fetching user timeline", &e),
        };
        match api.user_timeline(&params.user_id, query).await {
            Ok(page) => json_result("fetching user timeline", &page),
            Err(e) => failure_result("fetching user timeline", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UserTimelineParams>(),
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
                let params: UserTimelineParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
