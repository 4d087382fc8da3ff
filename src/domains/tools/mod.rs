//! Tools domain module.
//!
//! Tools are the executable operations MCP clients can call. Each tool wraps
//! exactly one upstream X API operation behind a declared parameter contract.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, grouped by resource domain
//!   (tweet, user, timeline, community)
//! - `router.rs` - Builds the rmcp ToolRouter from the definitions
//! - `registry.rs` - Tool metadata listing and startup uniqueness check
//! - `common.rs` - The shared response envelope helpers
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create the tool in `definitions/<domain>/` (params, builder, execute)
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a route in `router.rs` and its name in `registry.rs`

pub mod common;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
