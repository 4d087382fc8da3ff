//! Authenticated account details tool.

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

/// The tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetMyDetailsParams {}

/// Fetch the authenticated user's own account record.
pub struct GetMyDetailsTool;

impl GetMyDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-my-details";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get my X account details";

    /// Execute the tool logic.
    pub async fn execute(_params: &GetMyDetailsParams, api: &dyn XApi) -> CallToolResult {
        info!("Fetching authenticated account details");
        match api.me().await {
            Ok(details) => json_result("fetching X account details", &details),
            Err(e) => failure_result("fetching X account details", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetMyDetailsParams>(),
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
                let params: GetMyDetailsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
