//! Error types and handling for the MCP server.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for server construction and startup.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_tool_error_converts_into_startup_error() {
        let err: Error = ToolError::DuplicateName("post-tweet".to_string()).into();
        assert!(err.to_string().contains("Duplicate tool name: post-tweet"));
    }
}
