//! Community search tool.

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
use crate::upstream::XApi;

/// Parameters for the search-communities tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchCommunitiesParams {
    /// Search query for finding communities.
    pub query: String,

    /// Maximum number of results to return (default: 10).
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

/// Search X communities by keyword.
pub struct SearchCommunitiesTool;

impl SearchCommunitiesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search-communities";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for X communities by keyword";

    /// Execute the tool logic.
    pub async fn execute(params: &SearchCommunitiesParams, api: &dyn XApi) -> CallToolResult {
        info!(query = %params.query, "Searching communities");
        match api
            .search_communities(&params.query, params.max_results)
            .await
        {
            Ok(page) => json_result("searching communities", &page),
            Err(e) => failure_result("searching communities", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchCommunitiesParams>(),
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
                let params: SearchCommunitiesParams =
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

    #[test]
    fn test_search_request_shape() {
        let api = RecordingApi::new();
        let params = SearchCommunitiesParams {
            query: "rust".to_string(),
            max_results: 5,
        };
        tokio_test::block_on(SearchCommunitiesTool::execute(&params, &api));
        assert_eq!(api.ops(), vec!["search_communities"]);
        let request = &api.calls()[0].request;
        assert_eq!(request["query"], "rust");
        assert_eq!(request["max_results"], 5);
    }

    #[test]
    fn test_search_default_max_results() {
        let params: SearchCommunitiesParams =
            serde_json::from_value(serde_json::json!({"query": "rust"})).unwrap();
        assert_eq!(params.max_results, 10);
    }

    #[test]
    fn test_search_failure_phrase() {
        let api = RecordingApi::failing("upstream down");
        let params = SearchCommunitiesParams {
            query: "rust".to_string(),
            max_results: 10,
        };
        let result = tokio_test::block_on(SearchCommunitiesTool::execute(&params, &api));
        let text = envelope_text(&result);
        assert!(text.contains("Error searching communities"));
        assert!(text.contains("upstream down"));
    }
}
