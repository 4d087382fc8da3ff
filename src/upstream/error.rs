//! Upstream client error type.
//!
//! Every upstream failure collapses into a single descriptive kind; tools
//! forward the message text and do not branch on error subtypes.

use thiserror::Error;

/// Errors raised by the upstream X API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connection, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{0}")]
    Upstream(String),

    /// The API answered with a body we could not interpret.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an `Upstream` error from a status code and response body.
    ///
    /// X error bodies carry `title` and `detail` fields; fall back to the raw
    /// body when they are absent.
    pub fn upstream(status: reqwest::StatusCode, body: &str) -> Self {
        let description = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                let title = v.get("title")?.as_str()?.to_string();
                match v.get("detail").and_then(|d| d.as_str()) {
                    Some(detail) => Some(format!("{}: {}", title, detail)),
                    None => Some(title),
                }
            })
            .unwrap_or_else(|| body.trim().to_string());

        Self::Upstream(format!("HTTP {}: {}", status.as_u16(), description))
    }

    /// Build a `Decode` error for a response missing an expected field.
    pub fn missing_field(field: &str) -> Self {
        Self::Decode(format!("response is missing '{}'", field))
    }
}
