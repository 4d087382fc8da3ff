//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output; the transport handles
//! the connection lifecycle and delegates message processing to the server
//! handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
