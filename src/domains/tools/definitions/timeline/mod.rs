//! Timeline-domain tools: home timeline, user timeline, quote tweets.

mod home;
mod quotes;
mod user;

pub use home::GetHomeTimelineTool;
pub use quotes::GetQuotedTweetsTool;
pub use user::GetUserTimelineTool;
