//! Domain modules organized by bounded context.
//!
//! The only domain this server exposes is tools; every tool wraps one
//! upstream X API operation.

pub mod tools;
