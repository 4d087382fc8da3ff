//! Tool registry: the tool inventory and the startup uniqueness check.
//!
//! The registry is the single source of truth for which tools exist. The
//! router builds its routes from the same definitions; a test below keeps the
//! two in sync.

use rmcp::model::Tool;

use super::definitions::{
    AdvancedTweetTool, BookmarkTool, DeleteTweetTool, EngageOp, EngageTool, FollowDirection,
    FollowListTool, GetCommunityTool, GetHomeTimelineTool, GetMyDetailsTool, GetQuotedTweetsTool,
    GetTweetsTool, GetUserByUsernameTool, GetUserDetailsTool, GetUserTimelineTool, PostTweetTool,
    ReplyTweetTool, SearchCommunitiesTool, TweetThreadTool,
};
use super::error::ToolError;

/// Tool registry - lists all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            PostTweetTool::NAME,
            AdvancedTweetTool::NAME,
            ReplyTweetTool::NAME,
            TweetThreadTool::NAME,
            EngageOp::Like.name(),
            EngageOp::Unlike.name(),
            EngageOp::Retweet.name(),
            EngageOp::Unretweet.name(),
            BookmarkTool::NAME,
            DeleteTweetTool::NAME,
            GetTweetsTool::NAME,
            GetMyDetailsTool::NAME,
            GetUserDetailsTool::NAME,
            GetUserByUsernameTool::NAME,
            FollowDirection::Followers.name(),
            FollowDirection::Following.name(),
            GetHomeTimelineTool::NAME,
            GetUserTimelineTool::NAME,
            GetQuotedTweetsTool::NAME,
            GetCommunityTool::NAME,
            SearchCommunitiesTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            PostTweetTool::to_tool(),
            AdvancedTweetTool::to_tool(),
            ReplyTweetTool::to_tool(),
            TweetThreadTool::to_tool(),
            EngageTool::to_tool(EngageOp::Like),
            EngageTool::to_tool(EngageOp::Unlike),
            EngageTool::to_tool(EngageOp::Retweet),
            EngageTool::to_tool(EngageOp::Unretweet),
            BookmarkTool::to_tool(),
            DeleteTweetTool::to_tool(),
            GetTweetsTool::to_tool(),
            GetMyDetailsTool::to_tool(),
            GetUserDetailsTool::to_tool(),
            GetUserByUsernameTool::to_tool(),
            FollowListTool::to_tool(FollowDirection::Followers),
            FollowListTool::to_tool(FollowDirection::Following),
            GetHomeTimelineTool::to_tool(),
            GetUserTimelineTool::to_tool(),
            GetQuotedTweetsTool::to_tool(),
            GetCommunityTool::to_tool(),
            SearchCommunitiesTool::to_tool(),
        ]
    }

    /// Verify no two tools share a name. Run at server construction so a
    /// collision fails startup instead of shadowing a route.
    pub fn ensure_unique_names() -> Result<(), ToolError> {
        let mut seen = std::collections::HashSet::new();
        for name in Self::tool_names() {
            if !seen.insert(name) {
                return Err(ToolError::DuplicateName(name.to_string()));
            }
        }
        Ok(())
    }
}
