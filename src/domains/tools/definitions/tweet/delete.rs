//! Tweet deletion tool.

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
use crate::upstream::XApi;

/// Parameters for the delete-tweet tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTweetParams {
    /// The ID of the tweet to delete.
    pub tweet_id: String,
}

/// Delete a tweet owned by the authenticated user.
pub struct DeleteTweetTool;

impl DeleteTweetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete-tweet";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a specific tweet owned by the authenticated user";

    /// Execute the tool logic.
    pub async fn execute(params: &DeleteTweetParams, api: &dyn XApi) -> CallToolResult {
        info!(tweet_id = %params.tweet_id, "Deleting tweet");
        match api.delete_tweet(&params.tweet_id).await {
            Ok(true) => text_result(format!("Tweet {} deleted successfully!", params.tweet_id)),
            Ok(false) => text_result(format!("Failed to delete tweet {}", params.tweet_id)),
            Err(e) => failure_result("deleting tweet", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeleteTweetParams>(),
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
                let params: DeleteTweetParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
