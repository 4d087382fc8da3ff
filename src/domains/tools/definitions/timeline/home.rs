//! Home timeline tool.

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
use crate::upstream::{Exclusion, TimelineQuery, XApi};

/// Parameters for the get-home-timeline tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeTimelineParams {
    /// Maximum number of results to return (default: 10).
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Whether to exclude replies.
    #[serde(default)]
    pub exclude_replies: bool,

    /// Whether to exclude retweets.
    #[serde(default)]
    pub exclude_retweets: bool,
}

/// Build the timeline query, composing exclusion flags into the exclusion
/// list; the list is absent when nothing is excluded.
pub fn build_query(params: &HomeTimelineParams) -> TimelineQuery {
    TimelineQuery::new(
        params.max_results,
        Exclusion::compose(params.exclude_replies, params.exclude_retweets),
    )
}

/// Fetch tweets from the authenticated user's home timeline.
pub struct GetHomeTimelineTool;

impl GetHomeTimelineTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-home-timeline";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get tweets from your home timeline";

    /// Execute the tool logic.
    pub async fn execute(params: &HomeTimelineParams, api: &dyn XApi) -> CallToolResult {
        info!(max_results = params.max_results, "Fetching home timeline");
        match api.home_timeline(build_query(params)).await {
            Ok(page) => json_result("fetching home timeline", &page),
            Err(e) => failure_result("fetching home timeline", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HomeTimelineParams>(),
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
                let params: HomeTimelineParams =
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

    fn params(replies: bool, retweets: bool) -> HomeTimelineParams {
        HomeTimelineParams {
            max_results: 10,
            exclude_replies: replies,
            exclude_retweets: retweets,
        }
    }

    #[test]
    fn test_exclude_replies_only() {
        let query = build_query(&params(true, false));
        assert_eq!(query.exclude, Some(vec![Exclusion::Replies]));
    }

    #[test]
    fn test_no_exclusions_means_absent_field() {
        let api = RecordingApi::new();
        tokio_test::block_on(GetHomeTimelineTool::execute(&params(false, false), &api));
        let request = &api.calls()[0].request;
        assert!(
            request.get("exclude").is_none(),
            "exclude must be omitted, not empty: {request}"
        );
    }

    #[test]
    fn test_exclusions_reach_upstream_request() {
        let api = RecordingApi::new();
        tokio_test::block_on(GetHomeTimelineTool::execute(&params(true, false), &api));
        assert_eq!(
            api.calls()[0].request["exclude"],
            serde_json::json!(["replies"])
        );
    }

    #[test]
    fn test_output_is_rendered_page() {
        let api = RecordingApi::new();
        let result =
            tokio_test::block_on(GetHomeTimelineTool::execute(&params(false, false), &api));
        let text = envelope_text(&result);
        assert!(text.contains("\"meta\""));
        assert!(text.contains("\"data\""));
    }

    #[test]
    fn test_failure_stays_in_envelope() {
        let api = RecordingApi::failing("rate limited");
        let result =
            tokio_test::block_on(GetHomeTimelineTool::execute(&params(false, false), &api));
        let text = envelope_text(&result);
        assert!(text.contains("Error fetching home timeline"));
        assert!(text.contains("rate limited"));
    }
}
