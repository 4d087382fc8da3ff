//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route; this module only wires them
//! together with the shared upstream client handle.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::upstream::XApi;

use super::definitions::{
    AdvancedTweetTool, BookmarkTool, DeleteTweetTool, EngageOp, EngageTool, FollowDirection,
    FollowListTool, GetCommunityTool, GetHomeTimelineTool, GetMyDetailsTool, GetQuotedTweetsTool,
    GetTweetsTool, GetUserByUsernameTool, GetUserDetailsTool, GetUserTimelineTool, PostTweetTool,
    ReplyTweetTool, SearchCommunitiesTool, TweetThreadTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(api: Arc<dyn XApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(PostTweetTool::create_route(api.clone()))
        .with_route(AdvancedTweetTool::create_route(api.clone()))
        .with_route(ReplyTweetTool::create_route(api.clone()))
        .with_route(TweetThreadTool::create_route(api.clone()))
        .with_route(EngageTool::create_route(EngageOp::Like, api.clone()))
        .with_route(EngageTool::create_route(EngageOp::Unlike, api.clone()))
        .with_route(EngageTool::create_route(EngageOp::Retweet, api.clone()))
        .with_route(EngageTool::create_route(EngageOp::Unretweet, api.clone()))
        .with_route(BookmarkTool::create_route(api.clone()))
        .with_route(DeleteTweetTool::create_route(api.clone()))
        .with_route(GetTweetsTool::create_route(api.clone()))
        .with_route(GetMyDetailsTool::create_route(api.clone()))
        .with_route(GetUserDetailsTool::create_route(api.clone()))
        .with_route(GetUserByUsernameTool::create_route(api.clone()))
        .with_route(FollowListTool::create_route(
            FollowDirection::Followers,
            api.clone(),
        ))
        .with_route(FollowListTool::create_route(
            FollowDirection::Following,
            api.clone(),
        ))
        .with_route(GetHomeTimelineTool::create_route(api.clone()))
        .with_route(GetUserTimelineTool::create_route(api.clone()))
        .with_route(GetQuotedTweetsTool::create_route(api.clone()))
        .with_route(GetCommunityTool::create_route(api.clone()))
        .with_route(SearchCommunitiesTool::create_route(api))
}
