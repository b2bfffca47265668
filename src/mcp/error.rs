//! Tool-specific error types.

use thiserror::Error;

/// Errors that stop a tool call before it reaches the store.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the manifest.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments did not match the tool's input schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_arguments(e.to_string())
    }
}
