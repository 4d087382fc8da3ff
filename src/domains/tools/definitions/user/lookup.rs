//! User lookup tools (by ID and by username).
//!
//! Both lookups request the same fixed profile field superset so user records
//! come back uniformly shaped regardless of which tool fetched them.

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
use crate::upstream::{UserReadFields, XApi};

/// Parameters for the get-user-details tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetUserDetailsParams {
    /// The X user ID to fetch details for.
    pub user_id: String,
}

/// Fetch a user record by ID.
pub struct GetUserDetailsTool;

impl GetUserDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-user-details";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details for a specific X user by ID";

    /// Execute the tool logic.
    pub async fn execute(params: &GetUserDetailsParams, api: &dyn XApi) -> CallToolResult {
        info!(user_id = %params.user_id, "Fetching user details");
        match api
            .user_by_id(&params.user_id, &UserReadFields::default())
            .await
        {
            Ok(user) => json_result("fetching user details", &user),
            Err(e) => failure_result("fetching user details", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetUserDetailsParams>(),
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
                let params: GetUserDetailsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}

/// Parameters for the get-user-by-username tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetUserByUsernameParams {
    /// The X username (without @) to fetch details for.
    pub username: String,
}

/// Fetch a user record by username.
pub struct GetUserByUsernameTool;

impl GetUserByUsernameTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-user-by-username";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details for a specific X user by username";

    /// Execute the tool logic.
    pub async fn execute(params: &GetUserByUsernameParams, api: &dyn XApi) -> CallToolResult {
        info!(username = %params.username, "Fetching user by username");
        match api
            .user_by_username(&params.username, &UserReadFields::default())
            .await
        {
            Ok(user) => json_result("fetching user by username", &user),
            Err(e) => failure_result("fetching user by username", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetUserByUsernameParams>(),
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
                let params: GetUserByUsernameParams =
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
    use crate::upstream::mock::RecordingApi;

    #[test]
    fn test_lookup_by_id_carries_profile_fields() {
        let api = RecordingApi::new();
        let params = GetUserDetailsParams {
            user_id: "7".to_string(),
        };
        tokio_test::block_on(GetUserDetailsTool::execute(&params, &api));
        assert_eq!(api.ops(), vec!["user_by_id"]);
        let fields = api.calls()[0].request["fields"]["user.fields"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(fields.contains("public_metrics"));
        assert!(fields.contains("verified_type"));
    }

    #[test]
    fn test_lookup_by_username_uses_username_path() {
        let api = RecordingApi::new();
        let params = GetUserByUsernameParams {
            username: "jack".to_string(),
        };
        tokio_test::block_on(GetUserByUsernameTool::execute(&params, &api));
        assert_eq!(api.ops(), vec!["user_by_username"]);
        assert_eq!(api.calls()[0].request["username"], "jack");
    }
}
