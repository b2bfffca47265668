//! Product Catalog Library
//!
//! This library provides an in-memory product catalog exposed through REST
//! endpoints and through MCP (Model Context Protocol) tools.

// Domain modules
pub mod catalog;
pub mod mcp;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;

pub use config::Config;
pub use error::{Error, Result};
