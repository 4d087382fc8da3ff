//! Tool definitions module.
//!
//! Tools are grouped by the resource domain they operate on. Each tool
//! declares its parameter contract, builds the upstream request, and
//! dispatches through the shared `XApi` handle it receives at registration.

pub mod community;
pub mod timeline;
pub mod tweet;
pub mod user;

pub use community::{GetCommunityTool, SearchCommunitiesTool};
pub use timeline::{GetHomeTimelineTool, GetQuotedTweetsTool, GetUserTimelineTool};
pub use tweet::{
    AdvancedTweetTool, BookmarkTool, DeleteTweetTool, EngageOp, EngageTool, GetTweetsTool,
    PostTweetTool, ReplyTweetTool, TweetThreadTool,
};
pub use user::{
    FollowDirection, FollowListTool, GetMyDetailsTool, GetUserByUsernameTool, GetUserDetailsTool,
};
