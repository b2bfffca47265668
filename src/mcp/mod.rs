//! Model Context Protocol (MCP) Module
//!
//! This module contains all MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, constants)
//! - RPC helpers (success/error envelopes, tool results)
//! - The catalog tool manifest and dispatcher
//! - MCP handlers (initialize, tools/list, tools/call, etc.)

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod tools;

// Re-export commonly used types and functions
pub use error::ToolError;
pub use handlers::routes;
pub use tools::{call_tool, tool_manifest, CatalogTool};
