//! Protocol-level error helpers
//!
//! These produce `rmcp::ErrorData`, which the client sees as a failed
//! request. Failures that belong in the tool's own output go through
//! [`crate::error_result`] instead.

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Internal error with a message
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Invalid params error with a message
///
/// Use this when parameters fail validation, before any tool work starts.
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}
