//! Authenticated X v2 REST client.
//!
//! One instance lives for the whole process and is shared read-only by every
//! tool dispatcher. Requests are signed with OAuth 1.0a; responses are decoded
//! into the shapes the dispatchers render. No caching, retrying or rate
//! limiting happens here.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use tokio::sync::OnceCell;
use tracing::debug;

use super::api::{ApiResult, XApi};
use super::error::ApiError;
use super::oauth::OAuth1;
use super::types::{
    FollowQuery, Page, PostedTweet, TimelineQuery, TweetReadFields, TweetRequest, UserReadFields,
};
use crate::core::config::CredentialsConfig;

const DEFAULT_BASE_URL: &str = "https://api.x.com";

/// Page-size windows accepted by the paginated v2 endpoints. Tweet-returning
/// reads take at most 100 results per page; follower graph reads take 1000.
const PAGE_SIZE_MIN: u32 = 1;
const PAGE_SIZE_MAX: u32 = 100;
const FOLLOW_PAGE_SIZE_MAX: u32 = 1000;

/// The shared REST client handle.
pub struct RestClient {
    http: reqwest::Client,
    oauth: OAuth1,
    base_url: String,
    /// Authenticated user id, fetched lazily for endpoints addressed by it.
    authed_user_id: OnceCell<String>,
}

impl RestClient {
    /// Build a client from startup credentials.
    pub fn new(credentials: &CredentialsConfig) -> ApiResult<Self> {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Build a client against a non-default API host.
    pub fn with_base_url(credentials: &CredentialsConfig, base_url: &str) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("x-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            oauth: OAuth1::new(
                &credentials.api_key,
                &credentials.api_key_secret,
                &credentials.access_token,
                &credentials.access_token_secret,
            ),
            base_url: base_url.trim_end_matches('/').to_string(),
            authed_user_id: OnceCell::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one signed request and decode the JSON body.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> ApiResult<serde_json::Value> {
        let url = self.url(path);
        let auth = self
            .oauth
            .authorization_header(method.as_str(), &url, query);
        debug!(%method, path, "upstream request");

        let mut request = self.http.request(method, &url).header(AUTHORIZATION, auth);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::upstream(status, &text));
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Id of the authenticated user, fetched once and cached.
    async fn authed_user_id(&self) -> ApiResult<String> {
        let id = self
            .authed_user_id
            .get_or_try_init(|| async {
                let me = self.me().await?;
                me.get("id")
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string())
                    .ok_or_else(|| ApiError::missing_field("data.id"))
            })
            .await?;
        Ok(id.clone())
    }

    /// Create one tweet; shared by `post_tweet` and the thread loop.
    async fn create_tweet(&self, request: &TweetRequest) -> ApiResult<PostedTweet> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self.send(Method::POST, "/2/tweets", &[], Some(&body)).await?;
        let data = take_data(response)?;
        serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Boolean engagement toggles share one request/decode shape.
    async fn toggle(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        flag: &str,
    ) -> ApiResult<bool> {
        let response = self.send(method, path, &[], body.as_ref()).await?;
        response
            .get("data")
            .and_then(|d| d.get(flag))
            .and_then(|v| v.as_bool())
            .ok_or_else(|| ApiError::missing_field(flag))
    }

    async fn fetch_page(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Page> {
        let response = self.send(Method::GET, path, query, None).await?;
        serde_json::from_value(response).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Take the `data` member out of a response body.
fn take_data(mut response: serde_json::Value) -> ApiResult<serde_json::Value> {
    match response.get_mut("data") {
        Some(data) => Ok(data.take()),
        None => Err(ApiError::missing_field("data")),
    }
}

fn clamp_page_size(requested: u32) -> u32 {
    requested.clamp(PAGE_SIZE_MIN, PAGE_SIZE_MAX)
}

fn clamp_follow_page_size(requested: u32) -> u32 {
    requested.clamp(PAGE_SIZE_MIN, FOLLOW_PAGE_SIZE_MAX)
}

fn timeline_query_pairs(query: &TimelineQuery) -> Vec<(&'static str, String)> {
    let mut pairs = vec![(
        "max_results",
        clamp_page_size(query.max_results).to_string(),
    )];
    if let Some(exclude) = &query.exclude {
        let joined = exclude
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(",");
        pairs.push(("exclude", joined));
    }
    pairs.extend(tweet_field_pairs(&query.fields));
    pairs
}

fn tweet_field_pairs(fields: &TweetReadFields) -> Vec<(&'static str, String)> {
    vec![
        ("expansions", fields.expansions.to_string()),
        ("tweet.fields", fields.tweet_fields.to_string()),
        ("user.fields", fields.user_fields.to_string()),
    ]
}

fn user_field_pairs(fields: &UserReadFields) -> Vec<(&'static str, String)> {
    vec![("user.fields", fields.user_fields.to_string())]
}

fn encode_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[async_trait]
impl XApi for RestClient {
    async fn post_tweet(&self, request: TweetRequest) -> ApiResult<PostedTweet> {
        self.create_tweet(&request).await
    }

    async fn post_thread(&self, requests: Vec<TweetRequest>) -> ApiResult<Vec<PostedTweet>> {
        let mut posted = Vec::with_capacity(requests.len());
        let mut previous: Option<String> = None;
        for mut request in requests {
            // Link to the predecessor unless the item targets a reply itself.
            if request.reply.is_none()
                && let Some(prev) = &previous
            {
                request.reply = Some(super::types::ReplyTarget {
                    in_reply_to_tweet_id: prev.clone(),
                });
            }
            let tweet = self.create_tweet(&request).await?;
            previous = Some(tweet.id.clone());
            posted.push(tweet);
        }
        Ok(posted)
    }

    async fn delete_tweet(&self, tweet_id: &str) -> ApiResult<bool> {
        let path = format!("/2/tweets/{}", encode_segment(tweet_id));
        self.toggle(Method::DELETE, &path, None, "deleted").await
    }

    async fn like(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool> {
        let path = format!("/2/users/{}/likes", encode_segment(user_id));
        let body = serde_json::json!({ "tweet_id": tweet_id });
        self.toggle(Method::POST, &path, Some(body), "liked").await
    }

    async fn unlike(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool> {
        let path = format!(
            "/2/users/{}/likes/{}",
            encode_segment(user_id),
            encode_segment(tweet_id)
        );
        self.toggle(Method::DELETE, &path, None, "liked").await
    }

    async fn retweet(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool> {
        let path = format!("/2/users/{}/retweets", encode_segment(user_id));
        let body = serde_json::json!({ "tweet_id": tweet_id });
        self.toggle(Method::POST, &path, Some(body), "retweeted")
            .await
    }

    async fn unretweet(&self, user_id: &str, tweet_id: &str) -> ApiResult<bool> {
        let path = format!(
            "/2/users/{}/retweets/{}",
            encode_segment(user_id),
            encode_segment(tweet_id)
        );
        self.toggle(Method::DELETE, &path, None, "retweeted").await
    }

    async fn bookmark(&self, tweet_id: &str) -> ApiResult<bool> {
        let user_id = self.authed_user_id().await?;
        let path = format!("/2/users/{}/bookmarks", encode_segment(&user_id));
        let body = serde_json::json!({ "tweet_id": tweet_id });
        self.toggle(Method::POST, &path, Some(body), "bookmarked")
            .await
    }

    async fn remove_bookmark(&self, tweet_id: &str) -> ApiResult<bool> {
        let user_id = self.authed_user_id().await?;
        let path = format!(
            "/2/users/{}/bookmarks/{}",
            encode_segment(&user_id),
            encode_segment(tweet_id)
        );
        self.toggle(Method::DELETE, &path, None, "bookmarked").await
    }

    async fn tweet(
        &self,
        tweet_id: &str,
        fields: &TweetReadFields,
    ) -> ApiResult<serde_json::Value> {
        let path = format!("/2/tweets/{}", encode_segment(tweet_id));
        let query = tweet_field_pairs(fields);
        let response = self.send(Method::GET, &path, &query, None).await?;
        take_data(response)
    }

    async fn tweets(
        &self,
        tweet_ids: &[String],
        fields: &TweetReadFields,
    ) -> ApiResult<serde_json::Value> {
        let mut query = vec![("ids", tweet_ids.join(","))];
        query.extend(tweet_field_pairs(fields));
        self.send(Method::GET, "/2/tweets", &query, None).await
    }

    async fn home_timeline(&self, query: TimelineQuery) -> ApiResult<Page> {
        let user_id = self.authed_user_id().await?;
        let path = format!(
            "/2/users/{}/timelines/reverse_chronological",
            encode_segment(&user_id)
        );
        self.fetch_page(&path, &timeline_query_pairs(&query)).await
    }

    async fn user_timeline(&self, user_id: &str, query: TimelineQuery) -> ApiResult<Page> {
        let path = format!("/2/users/{}/tweets", encode_segment(user_id));
        self.fetch_page(&path, &timeline_query_pairs(&query)).await
    }

    async fn quote_tweets(&self, tweet_id: &str, query: TimelineQuery) -> ApiResult<Page> {
        let path = format!("/2/tweets/{}/quote_tweets", encode_segment(tweet_id));
        self.fetch_page(&path, &timeline_query_pairs(&query)).await
    }

    async fn me(&self) -> ApiResult<serde_json::Value> {
        let response = self.send(Method::GET, "/2/users/me", &[], None).await?;
        take_data(response)
    }

    async fn user_by_id(
        &self,
        user_id: &str,
        fields: &UserReadFields,
    ) -> ApiResult<serde_json::Value> {
        let path = format!("/2/users/{}", encode_segment(user_id));
        let response = self
            .send(Method::GET, &path, &user_field_pairs(fields), None)
            .await?;
        take_data(response)
    }

    async fn user_by_username(
        &self,
        username: &str,
        fields: &UserReadFields,
    ) -> ApiResult<serde_json::Value> {
        let path = format!("/2/users/by/username/{}", encode_segment(username));
        let response = self
            .send(Method::GET, &path, &user_field_pairs(fields), None)
            .await?;
        take_data(response)
    }

    async fn followers(&self, user_id: &str, query: FollowQuery) -> ApiResult<Page> {
        let path = format!("/2/users/{}/followers", encode_segment(user_id));
        let mut pairs = vec![(
            "max_results",
            clamp_follow_page_size(query.max_results).to_string(),
        )];
        pairs.extend(user_field_pairs(&query.fields));
        self.fetch_page(&path, &pairs).await
    }

    async fn following(&self, user_id: &str, query: FollowQuery) -> ApiResult<Page> {
        let path = format!("/2/users/{}/following", encode_segment(user_id));
        let mut pairs = vec![(
            "max_results",
            clamp_follow_page_size(query.max_results).to_string(),
        )];
        pairs.extend(user_field_pairs(&query.fields));
        self.fetch_page(&path, &pairs).await
    }

    async fn community(&self, community_id: &str) -> ApiResult<serde_json::Value> {
        let path = format!("/2/communities/{}", encode_segment(community_id));
        let response = self.send(Method::GET, &path, &[], None).await?;
        take_data(response)
    }

    async fn search_communities(
        &self,
        search: &str,
        max_results: u32,
    ) -> ApiResult<serde_json::Value> {
        let query = vec![
            ("query", search.to_string()),
            ("max_results", clamp_page_size(max_results).to_string()),
        ];
        let response = self
            .send(Method::GET, "/2/communities/search", &query, None)
            .await?;
        take_data(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::types::Exclusion;

    #[test]
    fn test_clamp_page_size_window() {
        assert_eq!(clamp_page_size(0), 1);
        assert_eq!(clamp_page_size(10), 10);
        assert_eq!(clamp_page_size(3200), 100);
    }

    #[test]
    fn test_follow_page_size_allows_larger_window() {
        assert_eq!(clamp_follow_page_size(0), 1);
        assert_eq!(clamp_follow_page_size(500), 500);
        assert_eq!(clamp_follow_page_size(5000), 1000);
    }

    #[test]
    fn test_timeline_pairs_omit_absent_exclude() {
        let query = TimelineQuery::new(10, None);
        let pairs = timeline_query_pairs(&query);
        assert!(pairs.iter().all(|(k, _)| *k != "exclude"));
        assert!(pairs.iter().any(|(k, v)| *k == "max_results" && v == "10"));
    }

    #[test]
    fn test_timeline_pairs_join_exclusions() {
        let query = TimelineQuery::new(10, Exclusion::compose(true, true));
        let pairs = timeline_query_pairs(&query);
        let exclude = pairs.iter().find(|(k, _)| *k == "exclude").unwrap();
        assert_eq!(exclude.1, "replies,retweets");
    }

    #[test]
    fn test_take_data_requires_member() {
        let ok = take_data(serde_json::json!({"data": {"id": "1"}})).unwrap();
        assert_eq!(ok["id"], "1");
        assert!(take_data(serde_json::json!({"errors": []})).is_err());
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let creds = CredentialsConfig::default();
        let client = RestClient::with_base_url(&creds, "https://example.test/").unwrap();
        assert_eq!(client.url("/2/users/me"), "https://example.test/2/users/me");
    }
}
