//! User-domain tools: account details, lookup, follower graph reads.

mod lookup;
mod me;
mod social;

pub use lookup::{GetUserByUsernameTool, GetUserDetailsTool};
pub use me::GetMyDetailsTool;
pub use social::{FollowDirection, FollowListTool};
