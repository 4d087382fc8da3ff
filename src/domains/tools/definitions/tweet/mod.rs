//! Tweet-domain tools: creation, engagement toggles, bookmarks, lookup.

mod bookmark;
mod compose;
mod delete;
mod engage;
mod lookup;
mod post;
mod reply;
mod thread;

pub use bookmark::BookmarkTool;
pub use compose::AdvancedTweetTool;
pub use delete::DeleteTweetTool;
pub use engage::{EngageOp, EngageTool};
pub use lookup::GetTweetsTool;
pub use post::PostTweetTool;
pub use reply::ReplyTweetTool;
pub use thread::TweetThreadTool;
