//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sends logs to stderr, keeping stdout for the protocol
//! - **Results**: [`json_success`] and [`error_result`] build `CallToolResult` values
//! - **Errors**: [`invalid_params`] / [`internal_error`] for protocol-level failures
//! - **Embeddable**: [`EmbeddableMcp`] for calling a server's tools in-process
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{error_result, json_success};
//!
//! async fn my_tool(&self) -> Result<CallToolResult, McpError> {
//!     match self.lookup().await {
//!         Ok(data) => json_success(&data),
//!         Err(e) => Ok(error_result(e.to_string())),
//!     }
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, McpResult};
pub use init::init_tracing;
pub use result::{error_result, json_success, ToolErrorBody};

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
