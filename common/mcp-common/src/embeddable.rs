//! In-process tool dispatch
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! transport. Each server maps tool names to its own handlers, so the table
//! of tools is fixed when the server is built.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//!
//! let tools = server.list_tools();
//! let result = server.call_tool("search", serde_json::json!({ "query": "shoes" })).await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, ErrorCode, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Parameters were rejected before the tool ran
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Parameters could not be deserialized
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// Any other protocol-level failure
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        if err.code == ErrorCode::INVALID_PARAMS {
            EmbeddableError::InvalidParams(err.message.to_string())
        } else {
            EmbeddableError::McpError(err.message.to_string())
        }
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Trait for MCP servers that can be executed in-process
///
/// Implementations must be `Send + Sync`; tool calls may overlap.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used in MCP configuration files
    fn server_name(&self) -> &str;

    /// Every tool with its name, description and input schema
    fn list_tools(&self) -> Vec<Tool>;

    /// Execute the tool `name` with JSON parameters
    ///
    /// Tool-level failures come back as a `CallToolResult` with `is_error`
    /// set. `Err` is reserved for unknown tools and rejected parameters.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }
}
