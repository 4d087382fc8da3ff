//! Advanced tweet composition tool: reply, quote and poll modifiers.

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

use crate::domains::tools::ToolError;
use crate::domains::tools::common::{failure_result, text_result};
use crate::upstream::{PollSpec, ReplyTarget, TweetRequest, XApi};

/// Poll duration applied when the caller requests a poll without one.
const DEFAULT_POLL_DURATION_MINUTES: u32 = 1440;

const POLL_OPTIONS_MIN: usize = 2;
const POLL_OPTIONS_MAX: usize = 4;

/// Parameters for the advanced-tweet tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AdvancedTweetParams {
    /// The text content of the tweet.
    pub text: String,

    /// Tweet ID to reply to.
    #[serde(default)]
    pub reply_to: Option<String>,

    /// Tweet ID to quote.
    #[serde(default)]
    pub quote: Option<String>,

    /// Add a poll to the tweet.
    #[serde(default)]
    pub poll: Option<PollParams>,
}

/// Poll attachment parameters.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PollParams {
    /// Poll options (2-4 choices).
    #[schemars(length(min = 2, max = 4))]
    pub options: Vec<String>,

    /// Poll duration in minutes (default: 1440, i.e. 24 hours).
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// Build the upstream request, adding each modifier only when present.
pub fn build_request(params: &AdvancedTweetParams) -> Result<TweetRequest, ToolError> {
    let mut request = TweetRequest::text(&params.text);

    if let Some(reply_to) = &params.reply_to {
        request.reply = Some(ReplyTarget {
            in_reply_to_tweet_id: reply_to.clone(),
        });
    }

    if let Some(quote) = &params.quote {
        request.quote_tweet_id = Some(quote.clone());
    }

    if let Some(poll) = &params.poll {
        let count = poll.options.len();
        if !(POLL_OPTIONS_MIN..=POLL_OPTIONS_MAX).contains(&count) {
            return Err(ToolError::invalid_arguments(format!(
                "poll.options must contain between {} and {} choices, got {}",
                POLL_OPTIONS_MIN, POLL_OPTIONS_MAX, count
            )));
        }
        request.poll = Some(PollSpec {
            options: poll.options.clone(),
            duration_minutes: poll
                .duration_minutes
                .unwrap_or(DEFAULT_POLL_DURATION_MINUTES),
        });
    }

    Ok(request)
}

/// Post a tweet with optional reply, quote and poll modifiers.
pub struct AdvancedTweetTool;

impl AdvancedTweetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "advanced-tweet";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Post a tweet with advanced options like reply to a tweet, quote a specific tweet, or create a poll for the tweet";

    /// Execute the tool logic.
    pub async fn execute(params: &AdvancedTweetParams, api: &dyn XApi) -> CallToolResult {
        info!(
            reply = params.reply_to.is_some(),
            quote = params.quote.is_some(),
            poll = params.poll.is_some(),
            "Composing tweet"
        );

        // A contract violation never reaches the upstream call.
        let request = match build_request(params) {
            Ok(request) => request,
            Err(e) => return failure_result("posting tweet", &e),
        };

        match api.post_tweet(request).await {
            Ok(tweet) => text_result(format!("Tweet posted successfully! Tweet ID: {}", tweet.id)),
            Err(e) => failure_result("posting tweet", &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AdvancedTweetParams>(),
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
                let params: AdvancedTweetParams =
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

    fn base_params() -> AdvancedTweetParams {
        AdvancedTweetParams {
            text: "announcement".to_string(),
            reply_to: None,
            quote: None,
            poll: None,
        }
    }

    #[test]
    fn test_build_request_plain() {
        let request = build_request(&base_params()).unwrap();
        assert_eq!(request, TweetRequest::text("announcement"));
    }

    #[test]
    fn test_build_request_all_modifiers() {
        let mut params = base_params();
        params.reply_to = Some("1".to_string());
        params.quote = Some("2".to_string());
        params.poll = Some(PollParams {
            options: vec!["yes".to_string(), "no".to_string()],
            duration_minutes: Some(60),
        });

        let request = build_request(&params).unwrap();
        assert_eq!(
            request.reply.unwrap().in_reply_to_tweet_id,
            "1".to_string()
        );
        assert_eq!(request.quote_tweet_id.as_deref(), Some("2"));
        assert_eq!(request.poll.unwrap().duration_minutes, 60);
    }

    #[test]
    fn test_poll_duration_defaults_to_1440() {
        let mut params = base_params();
        params.poll = Some(PollParams {
            options: vec!["a".to_string(), "b".to_string()],
            duration_minutes: None,
        });
        let request = build_request(&params).unwrap();
        assert_eq!(request.poll.unwrap().duration_minutes, 1440);
    }

    #[test]
    fn test_poll_with_one_option_never_reaches_upstream() {
        let mut params = base_params();
        params.poll = Some(PollParams {
            options: vec!["only".to_string()],
            duration_minutes: None,
        });

        let api = RecordingApi::new();
        let result = tokio_test::block_on(AdvancedTweetTool::execute(&params, &api));
        assert!(api.ops().is_empty(), "upstream must not be called");
        assert!(envelope_text(&result).contains("between 2 and 4"));
    }

    #[test]
    fn test_poll_with_five_options_never_reaches_upstream() {
        let mut params = base_params();
        params.poll = Some(PollParams {
            options: (0..5).map(|i| i.to_string()).collect(),
            duration_minutes: None,
        });

        let api = RecordingApi::new();
        let result = tokio_test::block_on(AdvancedTweetTool::execute(&params, &api));
        assert!(api.ops().is_empty());
        assert!(envelope_text(&result).contains("got 5"));
    }

    #[test]
    fn test_execute_sends_built_request() {
        let mut params = base_params();
        params.poll = Some(PollParams {
            options: vec!["a".to_string(), "b".to_string()],
            duration_minutes: None,
        });
        let api = RecordingApi::new();
        let result = tokio_test::block_on(AdvancedTweetTool::execute(&params, &api));
        assert!(envelope_text(&result).contains("Tweet posted successfully"));
        let call = &api.calls()[0];
        assert_eq!(call.request["poll"]["duration_minutes"], 1440);
    }
}
