//! MCP Server implementation and lifecycle management.
//!
//! The server handler implements the MCP protocol by routing tool calls
//! through the ToolRouter built in `domains/tools/router.rs`. Every tool
//! dispatches through the shared upstream client handle injected here.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};

use super::config::Config;
use crate::core::error::Result as CrateResult;
use crate::domains::tools::{ToolRegistry, build_tool_router};
use crate::upstream::XApi;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp; tool calls are routed
/// automatically by the `tool_handler` macro.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration and upstream
    /// client. Fails if two tools were registered under the same name.
    pub fn new(config: Config, api: Arc<dyn XApi>) -> CrateResult<Self> {
        ToolRegistry::ensure_unique_names()?;

        Ok(Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(api),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "X (Twitter) MCP server. Provides tools for posting, engaging with, \
                 and reading tweets, user profiles, timelines, and communities."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::mock::RecordingApi;

    fn test_server() -> McpServer {
        McpServer::new(Config::default(), Arc::new(RecordingApi::new())).unwrap()
    }

    #[test]
    fn test_server_construction_passes_uniqueness_check() {
        let server = test_server();
        assert_eq!(server.tool_router.list_all().len(), 21);
    }

    #[test]
    fn test_server_info_enables_tools() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_server_identity_from_config() {
        let server = test_server();
        assert_eq!(server.name(), "x-mcp-server");
        assert!(!server.version().is_empty());
    }
}
