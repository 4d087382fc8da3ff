//! X MCP Server Library
//!
//! This crate exposes the X (Twitter) v2 REST API as a set of MCP tools that
//! an LLM agent can invoke over stdio.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler, and the
//!   stdio transport.
//! - **upstream**: The X API capability set (`XApi` trait), the request and
//!   response shapes tools build, and the authenticated `RestClient`.
//! - **domains**: Tool definitions grouped by resource domain (tweet, user,
//!   timeline, community), plus the registry and router that bind them to the
//!   protocol server.

pub mod core;
pub mod domains;
pub mod upstream;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use upstream::{RestClient, XApi};
