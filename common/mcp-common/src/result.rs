//! Result helpers for MCP tool responses

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::{Deserialize, Serialize};

use crate::error::internal_error;

/// Successful response carrying pretty-printed JSON
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| internal_error(format!("failed to serialize tool output: {}", e)))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Payload of every tool-level error result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolErrorBody {
    pub error: String,
}

/// Uniform tool-level error
///
/// The result is flagged `is_error` and carries `{"error": message}` as its
/// only text content, so callers can tell failures apart without a
/// protocol error.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    let message: String = message.into();
    let json = serde_json::json!({ "error": message }).to_string();
    CallToolResult::error(vec![Content::text(json)])
}
