//! Engagement toggle tools: like, unlike, retweet, unretweet.
//!
//! The four tools share one parameter contract and dispatch shape; they
//! differ only in the upstream operation and the engagement state that counts
//! as success. The output phrasing reflects the state the upstream reports,
//! not merely the absence of a failure.

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
use crate::upstream::{ApiResult, XApi};

/// Parameters shared by all engagement toggles.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EngageParams {
    /// The ID of the tweet to act on.
    pub tweet_id: String,

    /// The ID of the X user performing the action.
    pub user_id: String,
}

/// The four engagement toggle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngageOp {
    Like,
    Unlike,
    Retweet,
    Unretweet,
}

impl EngageOp {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Like => "like-tweet",
            Self::Unlike => "unlike-tweet",
            Self::Retweet => "retweet",
            Self::Unretweet => "unretweet",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Like => "Like a specific tweet",
            Self::Unlike => "Unlike a specific tweet",
            Self::Retweet => "Retweet a specific tweet",
            Self::Unretweet => "Remove a retweet from a specific tweet",
        }
    }

    /// Verb used in output phrasing ("Successfully liked tweet ...").
    fn verb(&self) -> &'static str {
        match self {
            Self::Like => "liked",
            Self::Unlike => "unliked",
            Self::Retweet => "retweeted",
            Self::Unretweet => "unretweeted",
        }
    }

    /// Bare verb used in failure phrasing ("Failed to like tweet ...").
    fn infinitive(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Unlike => "unlike",
            Self::Retweet => "retweet",
            Self::Unretweet => "unretweet",
        }
    }

    /// Gerund used when naming a failed operation.
    fn gerund(&self) -> &'static str {
        match self {
            Self::Like => "liking tweet",
            Self::Unlike => "unliking tweet",
            Self::Retweet => "retweeting tweet",
            Self::Unretweet => "unretweeting tweet",
        }
    }

    async fn call(&self, api: &dyn XApi, user_id: &str, tweet_id: &str) -> ApiResult<bool> {
        match self {
            Self::Like => api.like(user_id, tweet_id).await,
            Self::Unlike => api.unlike(user_id, tweet_id).await,
            Self::Retweet => api.retweet(user_id, tweet_id).await,
            Self::Unretweet => api.unretweet(user_id, tweet_id).await,
        }
    }

    /// Whether the reported engagement state means the toggle took effect.
    fn took_effect(&self, engaged: bool) -> bool {
        match self {
            Self::Like | Self::Retweet => engaged,
            Self::Unlike | Self::Unretweet => !engaged,
        }
    }
}

/// One engagement toggle tool, parameterized by its operation.
pub struct EngageTool;

impl EngageTool {
    /// Execute the tool logic.
    pub async fn execute(op: EngageOp, params: &EngageParams, api: &dyn XApi) -> CallToolResult {
        info!(tool = op.name(), tweet_id = %params.tweet_id, "Toggling engagement");
        match op.call(api, &params.user_id, &params.tweet_id).await {
            Ok(engaged) if op.took_effect(engaged) => text_result(format!(
                "Successfully {} tweet {}",
                op.verb(),
                params.tweet_id
            )),
            Ok(_) => text_result(format!(
                "Failed to {} tweet {}",
                op.infinitive(),
                params.tweet_id
            )),
            Err(e) => failure_result(op.gerund(), &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(op: EngageOp) -> Tool {
        Tool {
            name: op.name().into(),
            description: Some(op.description().into()),
            input_schema: cached_schema_for_type::<EngageParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the shared client handle.
    pub fn create_route<S>(op: EngageOp, api: Arc<dyn XApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(op), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let api = api.clone();
            async move {
                let params: EngageParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(op, &params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
