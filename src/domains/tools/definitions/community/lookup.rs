//! Community lookup tool.

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
use crate::upstream::XApi;

/// Parameters for the get-community tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCommunityParams {
    /// The ID of the community to fetch.
    pub community_id: String,
}

/// Fetch details for a specific community.
pub struct GetCommunityTool;

impl GetCommunityTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-community";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details for a specific X community";

    /// Execute the tool logic.
    pub async fn execute(params: &GetCommunityParams, api: &dyn XApi) -> CallToolResult {
        info!(community_id = %params.community_id, "Fetching community details");
        match api.community(&params.community_id).await {
            Ok(community) => json_result("fetching community details", &community),
            Err(e) => failure_result("fetching community details", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCommunityParams>(),
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
                let params: GetCommunityParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
