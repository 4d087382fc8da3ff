//! The capability set of upstream operations available to tool dispatchers.
//!
//! Dispatchers receive this trait behind an `Arc` at registration time and
//! never construct HTTP requests themselves, so each tool is unit-testable
//! against a substitute implementation.

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{
    FollowQuery, Page, PostedTweet, TimelineQuery, TweetReadFields, TweetRequest, UserReadFields,
};

pub type ApiResult<T> = Result<T, ApiError>;

/// Authenticated X v2 API operations.
///
/// Toggle operations (`like`, `retweet`, `bookmark` and their inverses)
/// return the resulting engagement state reported by the API, not merely
/// whether the HTTP call succeeded.
#[async_trait]
pub trait XApi: Send + Sync {
    // -- Tweet writes ------------------------------------------------------

    /// Create a tweet, optionally with reply/quote/poll modifiers.
    async fn post_tweet(&self, request: TweetRequest) -> ApiResult<PostedTweet>;

    /// Post an ordered batch of tweets as a thread.
    ///
    /// Submission order must match `requests` order so reply-chain linkage is
    /// correct; returned tweets are in the same order.
    async fn post_thread(&self, requests: Vec<TweetRequest>) -> ApiResult<Vec<PostedTweet>>;

    /// Delete a tweet. Returns whether the API reports it deleted.
    async fn delete_tweet(&self, tweet_id: &str) -> ApiResult<bool>;

    // -- Engagement toggles ------------------------------------------------

    async fn like(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool>;
    async fn unlike(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool>;
    async fn retweet(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool>;
    async fn unretweet(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool>;

    /// Bookmark a tweet for the authenticated user.
    async fn bookmark(&self, tweet_id: &str) -> ApiResult<bool>;

    /// Remove a bookmark for the authenticated user.
    async fn remove_bookmark(&self, tweet_id: &str) -> ApiResult<bool>;

    // -- Tweet reads -------------------------------------------------------

    /// Fetch a single tweet; returns the tweet object.
    async fn tweet(&self, tweet_id: &str, fields: &TweetReadFields)
    -> ApiResult<serde_json::Value>;

    /// Fetch a batch of tweets; returns the full response body.
    async fn tweets(
        &self,
        tweet_ids: &[String],
        fields: &TweetReadFields,
    ) -> ApiResult<serde_json::Value>;

    // -- Timelines ---------------------------------------------------------

    /// Reverse-chronological home timeline of the authenticated user.
    async fn home_timeline(&self, query: TimelineQuery) -> ApiResult<Page>;

    /// Tweets authored by a specific user.
    async fn user_timeline(&self, user_id: &str, query: TimelineQuery) -> ApiResult<Page>;

    /// Tweets quoting a specific tweet.
    async fn quote_tweets(&self, tweet_id: &str, query: TimelineQuery) -> ApiResult<Page>;

    // -- Users -------------------------------------------------------------

    /// The authenticated user's own record.
    async fn me(&self) -> ApiResult<serde_json::Value>;

    async fn user_by_id(
        &self,
        user_id: &str,
        fields: &UserReadFields,
    ) -> ApiResult<serde_json::Value>;

    async fn user_by_username(
        &self,
        username: &str,
        fields: &UserReadFields,
    ) -> ApiResult<serde_json::Value>;

    async fn followers(&self, user_id: &str, query: FollowQuery) -> ApiResult<Page>;
    async fn following(&self, user_id: &str, query: FollowQuery) -> ApiResult<Page>;

    // -- Communities -------------------------------------------------------

    async fn community(&self, community_id: &str) -> ApiResult<serde_json::Value>;

    async fn search_communities(
        &self,
        query: &str,
        max_results: u32,
    ) -> ApiResult<serde_json::Value>;
}
