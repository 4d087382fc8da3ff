//! Upstream X API client.
//!
//! This module defines the capability set of upstream operations tools may
//! call (`XApi`), the request and response shapes the request builders
//! produce, and the authenticated `RestClient` that performs the HTTP calls.

pub mod api;
pub mod error;
pub mod oauth;
pub mod rest;
pub mod types;

#[cfg(test)]
pub mod mock;

pub use api::{ApiResult, XApi};
pub use error::ApiError;
pub use rest::RestClient;
pub use types::{
    Exclusion, FollowQuery, Page, PollSpec, PostedTweet, ReplyTarget, TimelineQuery,
    TweetReadFields, TweetRequest, UserReadFields,
};
