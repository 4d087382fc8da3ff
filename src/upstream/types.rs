//! Request and response shapes exchanged with the X v2 API.
//!
//! Request builders in the tool definitions produce these values; the
//! `RestClient` translates them into HTTP calls. Optional members are omitted
//! from the serialized request entirely when unset, which the API treats
//! differently from an explicit empty value.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A tweet creation request (`POST /2/tweets`).
///
/// Also the rich shape a thread item is normalized to before submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TweetRequest {
    /// The text content of the tweet.
    pub text: String,

    /// Reply linkage, present only when replying.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyTarget>,

    /// Tweet ID to quote, present only when quoting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_tweet_id: Option<String>,

    /// Poll attachment, present only when a poll is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<PollSpec>,
}

impl TweetRequest {
    /// A plain-text tweet with no modifiers.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Reply linkage for a tweet creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReplyTarget {
    /// The tweet being replied to.
    pub in_reply_to_tweet_id: String,
}

/// Poll attachment for a tweet creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PollSpec {
    /// Poll choices; the API accepts between 2 and 4.
    pub options: Vec<String>,

    /// Poll duration in minutes.
    pub duration_minutes: u32,
}

/// A tweet created by a write operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedTweet {
    /// Identifier assigned by the API.
    pub id: String,

    /// Text as stored (the API may normalize whitespace and entities).
    #[serde(default)]
    pub text: String,
}

/// Content categories a timeline read can omit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exclusion {
    Replies,
    Retweets,
}

impl Exclusion {
    /// Wire spelling of this exclusion.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replies => "replies",
            Self::Retweets => "retweets",
        }
    }

    /// Compose independent exclusion flags into the request's exclusion list.
    ///
    /// Returns `None` when nothing is excluded so the field is omitted from
    /// the request; an empty list would be an explicit empty filter.
    pub fn compose(exclude_replies: bool, exclude_retweets: bool) -> Option<Vec<Exclusion>> {
        let mut exclude = Vec::new();
        if exclude_replies {
            exclude.push(Self::Replies);
        }
        if exclude_retweets {
            exclude.push(Self::Retweets);
        }
        if exclude.is_empty() { None } else { Some(exclude) }
    }
}

/// Expansion and field superset applied to every tweet-returning read.
///
/// Fixed per domain so all read tools return uniformly shaped data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweetReadFields {
    pub expansions: &'static str,
    #[serde(rename = "tweet.fields")]
    pub tweet_fields: &'static str,
    #[serde(rename = "user.fields")]
    pub user_fields: &'static str,
}

impl Default for TweetReadFields {
    fn default() -> Self {
        Self {
            expansions: "author_id,attachments.media_keys,referenced_tweets.id",
            tweet_fields: "created_at,public_metrics,text,entities",
            user_fields: "name,username,profile_image_url",
        }
    }
}

/// Field superset applied to every user-returning read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReadFields {
    #[serde(rename = "user.fields")]
    pub user_fields: &'static str,
}

impl Default for UserReadFields {
    fn default() -> Self {
        Self {
            user_fields: "created_at,description,entities,location,name,profile_image_url,\
                          protected,public_metrics,url,username,verified,verified_type",
        }
    }
}

/// Query for a paginated tweet read (timelines, quote tweets).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineQuery {
    /// Number of results the caller asked for; fetched as one logical page.
    pub max_results: u32,

    /// Exclusion list; omitted when no categories are excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<Exclusion>>,

    #[serde(flatten)]
    pub fields: TweetReadFields,
}

impl TimelineQuery {
    pub fn new(max_results: u32, exclude: Option<Vec<Exclusion>>) -> Self {
        Self {
            max_results,
            exclude,
            fields: TweetReadFields::default(),
        }
    }
}

/// Query for a paginated user read (followers, following).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowQuery {
    pub max_results: u32,

    #[serde(flatten)]
    pub fields: UserReadFields,
}

impl FollowQuery {
    pub fn new(max_results: u32) -> Self {
        Self {
            max_results,
            fields: UserReadFields::default(),
        }
    }
}

/// One page of a paginated response, as returned to the caller.
///
/// Serialization order (meta, data, includes) matches the output shape
/// existing callers parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_single_exclusion() {
        let exclude = Exclusion::compose(true, false).unwrap();
        assert_eq!(exclude, vec![Exclusion::Replies]);
    }

    #[test]
    fn test_compose_both_exclusions_keeps_order() {
        let exclude = Exclusion::compose(true, true).unwrap();
        assert_eq!(exclude, vec![Exclusion::Replies, Exclusion::Retweets]);
    }

    #[test]
    fn test_compose_no_exclusions_is_absent() {
        assert!(Exclusion::compose(false, false).is_none());
    }

    #[test]
    fn test_timeline_query_omits_absent_exclude() {
        let query = TimelineQuery::new(10, None);
        let value = serde_json::to_value(&query).unwrap();
        assert!(value.get("exclude").is_none());
        assert_eq!(value["max_results"], 10);
    }

    #[test]
    fn test_timeline_query_serializes_exclude() {
        let query = TimelineQuery::new(10, Exclusion::compose(false, true));
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["exclude"], serde_json::json!(["retweets"]));
    }

    #[test]
    fn test_tweet_request_omits_unset_modifiers() {
        let request = TweetRequest::text("hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"text": "hello"}));
    }

    #[test]
    fn test_page_serialization_order_and_skips() {
        let page = Page {
            meta: Some(serde_json::json!({"result_count": 1})),
            data: Some(serde_json::json!([{"id": "1"}])),
            includes: None,
        };
        let text = serde_json::to_string(&page).unwrap();
        assert!(text.find("meta").unwrap() < text.find("data").unwrap());
        assert!(!text.contains("includes"));
    }
}
