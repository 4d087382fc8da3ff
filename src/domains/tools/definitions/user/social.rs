//! Follower graph tools: followers and following lists.
//!
//! Both directions share one parameter contract and dispatch shape; they
//! differ only in the upstream operation.

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
use crate::upstream::{FollowQuery, XApi};

/// Parameters shared by both follower graph reads.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowListParams {
    /// The X user ID to fetch the list for.
    pub user_id: String,

    /// Maximum number of results to return (default: 10).
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

/// Which side of the follow edge to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowDirection {
    Followers,
    Following,
}

impl FollowDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Followers => "get-user-followers",
            Self::Following => "get-user-following",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Followers => "Get followers of a specific X user",
            Self::Following => "Get accounts that a specific X user is following",
        }
    }

    fn operation(&self) -> &'static str {
        match self {
            Self::Followers => "fetching user followers",
            Self::Following => "fetching accounts user is following",
        }
    }
}

/// One follower graph tool, parameterized by direction.
pub struct FollowListTool;

impl FollowListTool {
    /// Execute the tool logic.
    pub async fn execute(
        direction: FollowDirection,
        params: &FollowListParams,
        api: &dyn XApi,
    ) -> CallToolResult {
        info!(tool = direction.name(), user_id = %params.user_id, "Fetching follow list");
        let query = FollowQuery::new(params.max_results);
        let page = match direction {
            FollowDirection::Followers => api.followers(&params.user_id, query).await,
            FollowDirection::Following => api.following(&params.user_id, query).await,
        };
        match page {
            Ok(page) => json_result(direction.operation(), &page),
            Err(e) => failure_result(direction.operation(), &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(direction: FollowDirection) -> Tool {
        Tool {
            name: direction.name().into(),
            description: Some(direction.description().into()),
            input_schema: cached_schema_for_type::<FollowListParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the shared client handle.
    pub fn create_route<S>(direction: FollowDirection, api: Arc<dyn XApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(
            Self::to_tool(direction),
            move |ctx: ToolCallContext<'_, S>| {
                let args = ctx.arguments.clone().unwrap_or_default();
                let api = api.clone();
                async move {
                    let params: FollowListParams =
                        serde_json::from_value(serde_json::Value::Object(args))
                            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                    Ok(Self::execute(direction, &params, api.as_ref()).await)
                }
                .boxed()
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::common::envelope_text;
    use crate::upstream::mock::RecordingApi;

    fn params() -> FollowListParams {
        FollowListParams {
            user_id: "7".to_string(),
            max_results: 25,
        }
    }

    #[test]
    fn test_followers_direction_uses_followers_path() {
        let api = RecordingApi::new();
        tokio_test::block_on(FollowListTool::execute(
            FollowDirection::Followers,
            &params(),
            &api,
        ));
        assert_eq!(api.ops(), vec!["followers"]);
        assert_eq!(api.calls()[0].request["query"]["max_results"], 25);
    }

    #[test]
    fn test_following_direction_uses_following_path() {
        let api = RecordingApi::new();
        tokio_test::block_on(FollowListTool::execute(
            FollowDirection::Following,
            &params(),
            &api,
        ));
        assert_eq!(api.ops(), vec!["following"]);
    }

    #[test]
    fn test_max_results_defaults_to_ten() {
        let params: FollowListParams =
            serde_json::from_value(serde_json::json!({"userId": "7"})).unwrap();
        assert_eq!(params.max_results, 10);
    }

    #[test]
    fn test_failure_names_direction_specific_operation() {
        let api = RecordingApi::failing("forbidden");
        let result = tokio_test::block_on(FollowListTool::execute(
            FollowDirection::Following,
            &params(),
            &api,
        ));
        let text = envelope_text(&result);
        assert!(text.contains("Error fetching accounts user is following"));
        assert!(text.contains("forbidden"));
    }
}
