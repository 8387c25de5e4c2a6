//! Tool contract shared by `search` and `fetch`
//!
//! Each tool is a type implementing [`OperationTool`]. [`invoke`] is the
//! single path from validated parameters to a `CallToolResult`: handler
//! errors are turned into a uniform error result here and never escape as
//! protocol faults.

use async_trait::async_trait;
use mcp_common::{error_result, invalid_params, json_success, CallToolResult, McpResult};
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::client::BackendError;
use crate::params::Validate;

mod fetch;
mod search;

pub use fetch::FetchTool;
pub use search::SearchTool;

/// Failures a tool handler reports to its caller
#[derive(Error, Debug)]
pub enum ToolError {
    /// `fetch` was given an id the store has never seen
    #[error("unknown id")]
    UnknownId,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// A named operation with a declared parameter schema
#[async_trait]
pub trait OperationTool: Send + Sync {
    type Params: DeserializeOwned + JsonSchema + Validate + Send + 'static;
    type Output: Serialize + Send;

    /// Stable tool name used for dispatch
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON schema of [`Self::Params`]
    fn param_schema(&self) -> Value {
        serde_json::to_value(schemars::schema_for!(Self::Params)).unwrap_or_default()
    }

    async fn handle(&self, params: Self::Params) -> Result<Self::Output, ToolError>;
}

/// Validate `params`, run the tool and format its outcome
///
/// Validation failures are protocol errors (`invalid_params`); the handler
/// never sees them. Handler failures become [`error_result`].
pub async fn invoke<T: OperationTool>(tool: &T, params: T::Params) -> McpResult<CallToolResult> {
    params
        .validate()
        .map_err(|e| invalid_params(e.to_string()))?;

    match tool.handle(params).await {
        Ok(output) => json_success(&output),
        Err(e) => {
            tracing::warn!(tool = tool.name(), error = %e, "tool call failed");
            Ok(error_result(e.to_string()))
        }
    }
}

/// String field of a raw record, treating `""` as absent
pub(crate) fn str_field<'a>(record: &'a Value, pointer: &str) -> Option<&'a str> {
    record
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// String field of a raw record, as is
pub(crate) fn raw_str(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

/// `description`, else `snippet`, else empty
pub(crate) fn record_text(record: &Value) -> String {
    str_field(record, "/description")
        .or_else(|| str_field(record, "/snippet"))
        .unwrap_or_default()
        .to_string()
}
