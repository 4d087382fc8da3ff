//! Community-domain tools: lookup and search.

mod lookup;
mod search;

pub use lookup::GetCommunityTool;
pub use search::SearchCommunitiesTool;
