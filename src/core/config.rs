//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (with `.env` support) or defaults.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// X API credentials.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// OAuth 1.0a user-context credentials for the X API.
///
/// All four values are long-lived secrets loaded once at startup. Missing
/// variables pass through as empty strings; the upstream rejects such
/// requests, which is surfaced like any other upstream failure.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Consumer key (app key).
    pub api_key: String,

    /// Consumer secret (app secret).
    pub api_key_secret: String,

    /// User access token.
    pub access_token: String,

    /// User access token secret.
    pub access_token_secret: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_key_secret", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .field("access_token_secret", &"[REDACTED]")
            .finish()
    }
}

impl CredentialsConfig {
    /// Whether every credential field is populated.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty()
            && !self.api_key_secret.is_empty()
            && !self.access_token.is_empty()
            && !self.access_token_secret.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "x-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Credentials come from `X_API_KEY`, `X_API_KEY_SECRET`, `X_ACCESS_TOKEN`
    /// and `X_ACCESS_TOKEN_SECRET`. Server overrides use the `MCP_` prefix:
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.credentials = CredentialsConfig {
            api_key: std::env::var("X_API_KEY").unwrap_or_default(),
            api_key_secret: std::env::var("X_API_KEY_SECRET").unwrap_or_default(),
            access_token: std::env::var("X_ACCESS_TOKEN").unwrap_or_default(),
            access_token_secret: std::env::var("X_ACCESS_TOKEN_SECRET").unwrap_or_default(),
        };

        if !config.credentials.is_complete() {
            warn!(
                "Incomplete X credentials: set X_API_KEY, X_API_KEY_SECRET, \
                 X_ACCESS_TOKEN and X_ACCESS_TOKEN_SECRET. Upstream calls will fail."
            );
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("X_API_KEY", "key");
            std::env::set_var("X_API_KEY_SECRET", "key_secret");
            std::env::set_var("X_ACCESS_TOKEN", "token");
            std::env::set_var("X_ACCESS_TOKEN_SECRET", "token_secret");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.api_key, "key");
        assert_eq!(config.credentials.access_token_secret, "token_secret");
        assert!(config.credentials.is_complete());
        unsafe {
            std::env::remove_var("X_API_KEY");
            std::env::remove_var("X_API_KEY_SECRET");
            std::env::remove_var("X_ACCESS_TOKEN");
            std::env::remove_var("X_ACCESS_TOKEN_SECRET");
        }
    }

    #[test]
    fn test_credentials_missing_pass_through_empty() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("X_API_KEY");
            std::env::remove_var("X_API_KEY_SECRET");
            std::env::remove_var("X_ACCESS_TOKEN");
            std::env::remove_var("X_ACCESS_TOKEN_SECRET");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.api_key, "");
        assert!(!config.credentials.is_complete());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            api_key: "super_secret_key".to_string(),
            api_key_secret: "even_more_secret".to_string(),
            access_token: "token".to_string(),
            access_token_secret: "token_secret".to_string(),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
        assert!(!debug_str.contains("even_more_secret"));
    }

    #[test]
    fn test_config_default_server_name() {
        let config = Config::default();
        assert_eq!(config.server.name, "x-mcp-server");
        assert_eq!(config.logging.level, "info");
    }
}
