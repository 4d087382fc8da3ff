//! Recording substitute for `XApi`, used by dispatcher unit tests.
//!
//! Records every invoked operation with the request it was handed, so tests
//! can assert which upstream path ran and what shape the builders produced.

use std::sync::Mutex;

use async_trait::async_trait;

use super::api::{ApiResult, XApi};
use super::error::ApiError;
use super::types::{
    FollowQuery, Page, PostedTweet, TimelineQuery, TweetReadFields, TweetRequest, UserReadFields,
};

/// One recorded upstream invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub op: &'static str,
    pub request: serde_json::Value,
}

/// Recording `XApi` substitute with configurable outcomes.
pub struct RecordingApi {
    calls: Mutex<Vec<RecordedCall>>,
    fail_with: Option<String>,
    /// Whether engagement toggles report that they took effect.
    toggle_effective: bool,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: None,
            toggle_effective: true,
        }
    }

    /// Every operation fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::new()
        }
    }

    /// Engagement toggles report whether they took effect.
    pub fn with_toggle_effective(effective: bool) -> Self {
        Self {
            toggle_effective: effective,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Names of the operations invoked, in order.
    pub fn ops(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(|c| c.op).collect()
    }

    fn record(&self, op: &'static str, request: serde_json::Value) -> ApiResult<()> {
        self.calls.lock().unwrap().push(RecordedCall { op, request });
        match &self.fail_with {
            Some(message) => Err(ApiError::Upstream(message.clone())),
            None => Ok(()),
        }
    }

    fn page() -> Page {
        Page {
            meta: Some(serde_json::json!({"result_count": 1})),
            data: Some(serde_json::json!([{"id": "1", "text": "stub"}])),
            includes: None,
        }
    }
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl XApi for RecordingApi {
    async fn post_tweet(&self, request: TweetRequest) -> ApiResult<PostedTweet> {
        self.record("post_tweet", serde_json::to_value(&request).unwrap())?;
        Ok(PostedTweet {
            id: "100".to_string(),
            text: request.text,
        })
    }

    async fn post_thread(&self, requests: Vec<TweetRequest>) -> ApiResult<Vec<PostedTweet>> {
        self.record("post_thread", serde_json::to_value(&requests).unwrap())?;
        Ok(requests
            .into_iter()
            .enumerate()
            .map(|(i, request)| PostedTweet {
                id: (100 + i).to_string(),
                text: request.text,
            })
            .collect())
    }

    async fn delete_tweet(&self, tweet_id: &str) -> ApiResult<bool> {
        self.record("delete_tweet", serde_json::json!({"tweet_id": tweet_id}))?;
        Ok(self.toggle_effective)
    }

    async fn like(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool> {
        self.record(
            "like",
            serde_json::json!({"user_id": user_id, "tweet_id": tweet_id}),
        )?;
        Ok(self.toggle_effective)
    }

    async fn unlike(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool> {
        self.record(
            "unlike",
            serde_json::json!({"user_id": user_id, "tweet_id": tweet_id}),
        )?;
        Ok(!self.toggle_effective)
    }

    async fn retweet(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool> {
        self.record(
            "retweet",
            serde_json::json!({"user_id": user_id, "tweet_id": tweet_id}),
        )?;
        Ok(self.toggle_effective)
    }

    async fn unretweet(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool> {
        self.record(
            "unretweet",
            serde_json::json!({"user_id": user_id, "tweet_id": tweet_id}),
        )?;
        Ok(!self.toggle_effective)
    }

    async fn bookmark(&self, tweet_id: &str) -> ApiResult<bool> {
        self.record("bookmark", serde_json::json!({"tweet_id": tweet_id}))?;
        Ok(self.toggle_effective)
    }

    async fn remove_bookmark(&self, tweet_id: &str) -> ApiResult<bool> {
        self.record(
            "remove_bookmark",
            serde_json::json!({"tweet_id": tweet_id}),
        )?;
        Ok(!self.toggle_effective)
    }

    async fn tweet(
        &self,
        tweet_id: &str,
        fields: &TweetReadFields,
    ) -> ApiResult<serde_json::Value> {
        self.record(
            "tweet",
            serde_json::json!({"tweet_id": tweet_id, "fields": fields}),
        )?;
        Ok(serde_json::json!({"id": tweet_id, "text": "stub tweet"}))
    }

    async fn tweets(
        &self,
        tweet_ids: &[String],
        fields: &TweetReadFields,
    ) -> ApiResult<serde_json::Value> {
        self.record(
            "tweets",
            serde_json::json!({"tweet_ids": tweet_ids, "fields": fields}),
        )?;
        Ok(serde_json::json!({
            "data": tweet_ids.iter().map(|id| serde_json::json!({"id": id})).collect::<Vec<_>>()
        }))
    }

    async fn home_timeline(&self, query: TimelineQuery) -> ApiResult<Page> {
        self.record("home_timeline", serde_json::to_value(&query).unwrap())?;
        Ok(Self::page())
    }

    async fn user_timeline(&self, user_id: &str, query: TimelineQuery) -> ApiResult<Page> {
        self.record(
            "user_timeline",
            serde_json::json!({"user_id": user_id, "query": query}),
        )?;
        Ok(Self::page())
    }

    async fn quote_tweets(&self, tweet_id: &str, query: TimelineQuery) -> ApiResult<Page> {
        self.record(
            "quote_tweets",
            serde_json::json!({"tweet_id": tweet_id, "query": query}),
        )?;
        Ok(Self::page())
    }

    async fn me(&self) -> ApiResult<serde_json::Value> {
        self.record("me", serde_json::Value::Null)?;
        Ok(serde_json::json!({"id": "42", "username": "me"}))
    }

    async fn user_by_id(
        &self,
        user_id: &str,
        fields: &UserReadFields,
    ) -> ApiResult<serde_json::Value> {
        self.record(
            "user_by_id",
            serde_json::json!({"user_id": user_id, "fields": fields}),
        )?;
        Ok(serde_json::json!({"id": user_id, "username": "someone"}))
    }

    async fn user_by_username(
        &self,
        username: &str,
        fields: &UserReadFields,
    ) -> ApiResult<serde_json::Value> {
        self.record(
            "user_by_username",
            serde_json::json!({"username": username, "fields": fields}),
        )?;
        Ok(serde_json::json!({"id": "7", "username": username}))
    }

    async fn followers(&self, user_id: &str, query: FollowQuery) -> ApiResult<Page> {
        self.record(
            "followers",
            serde_json::json!({"user_id": user_id, "query": query}),
        )?;
        Ok(Self::page())
    }

    async fn following(&self, user_id: &str, query: FollowQuery) -> ApiResult<Page> {
        self.record(
            "following",
            serde_json::json!({"user_id": user_id, "query": query}),
        )?;
        Ok(Self::page())
    }

    async fn community(&self, community_id: &str) -> ApiResult<serde_json::Value> {
        self.record("community", serde_json::json!({"community_id": community_id}))?;
        Ok(serde_json::json!({"id": community_id, "name": "stub community"}))
    }

    async fn search_communities(
        &self,
        query: &str,
        max_results: u32,
    ) -> ApiResult<serde_json::Value> {
        self.record(
            "search_communities",
            serde_json::json!({"query": query, "max_results": max_results}),
        )?;
        Ok(serde_json::json!([{"id": "9", "name": "stub community"}]))
    }
}
