//! OAuth 1.0a request signing (HMAC-SHA1).
//!
//! X v2 user-context endpoints authenticate with an OAuth 1.0a signature over
//! the request method, base URL and query parameters. Request bodies are JSON
//! and do not participate in the signature.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use rand::Rng;
use rand::distributions::Alphanumeric;
use sha1::Sha1;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha1 = Hmac<Sha1>;

/// Signs requests with a fixed set of long-lived credentials.
#[derive(Clone)]
pub struct OAuth1 {
    consumer_key: String,
    consumer_secret: String,
    token: String,
    token_secret: String,
}

impl OAuth1 {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }

    /// Produce the `Authorization` header value for one request.
    ///
    /// `query` must hold every query parameter the request will carry, with
    /// raw (unencoded) values.
    pub fn authorization_header(
        &self,
        method: &str,
        base_url: &str,
        query: &[(&str, String)],
    ) -> String {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
            .to_string();
        self.header_with(method, base_url, query, &nonce, &timestamp)
    }

    fn header_with(
        &self,
        method: &str,
        base_url: &str,
        query: &[(&str, String)],
        nonce: &str,
        timestamp: &str,
    ) -> String {
        let signature = self.signature(method, base_url, query, nonce, timestamp);

        let mut header_params: Vec<(&str, String)> = vec![
            ("oauth_consumer_key", self.consumer_key.clone()),
            ("oauth_nonce", nonce.to_string()),
            ("oauth_signature", signature),
            ("oauth_signature_method", "HMAC-SHA1".to_string()),
            ("oauth_timestamp", timestamp.to_string()),
            ("oauth_token", self.token.clone()),
            ("oauth_version", "1.0".to_string()),
        ];
        header_params.sort_by(|a, b| a.0.cmp(b.0));

        let fields: Vec<String> = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, percent_encode(v)))
            .collect();
        format!("OAuth {}", fields.join(", "))
    }

    /// Compute the base-string signature for one request.
    fn signature(
        &self,
        method: &str,
        base_url: &str,
        query: &[(&str, String)],
        nonce: &str,
        timestamp: &str,
    ) -> String {
        // Collect request + protocol parameters, percent-encoded, then sorted
        // by encoded key (and value on ties) per RFC 5849 §3.4.1.3.2.
        let mut params: Vec<(String, String)> = query
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .collect();
        params.push(("oauth_consumer_key".into(), percent_encode(&self.consumer_key)));
        params.push(("oauth_nonce".into(), percent_encode(nonce)));
        params.push(("oauth_signature_method".into(), "HMAC-SHA1".into()));
        params.push(("oauth_timestamp".into(), percent_encode(timestamp)));
        params.push(("oauth_token".into(), percent_encode(&self.token)));
        params.push(("oauth_version".into(), "1.0".into()));
        params.sort();

        let parameter_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(base_url),
            percent_encode(&parameter_string)
        );

        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.consumer_secret),
            percent_encode(&self.token_secret)
        );

        let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(base_string.as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for OAuth1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth1")
            .field("consumer_key", &"[REDACTED]")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// RFC 3986 percent-encoding with the unreserved set `A-Za-z0-9-._~`.
fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}
