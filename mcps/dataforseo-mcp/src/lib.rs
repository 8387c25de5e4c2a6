//! DataForSEO MCP Library
//!
//! Two tools over the DataForSEO API:
//! - `search` queries live SERP organic results or Labs keyword ideas and
//!   returns lightweight stubs, keeping each full record in a [`ResultStore`]
//! - `fetch` resolves a stub id back to the full record
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dataforseo_mcp::{Config, DataForSeoClient, DataForSeoMcpServer, ResultStore};
//!
//! let config = Config::load(None)?;
//! let client = DataForSeoClient::new(config.dataforseo)?;
//! let server = DataForSeoMcpServer::new(Arc::new(client), ResultStore::new());
//! ```
//!
//! # Configuration
//! Set `DATAFORSEO_USERNAME` / `DATAFORSEO_PASSWORD` or configure in `~/.binks/dataforseo.toml`

pub mod client;
pub mod config;
pub mod params;
pub mod server;
pub mod store;
pub mod tools;
pub mod types;

// Re-export main server type
pub use server::DataForSeoMcpServer;

pub use client::{BackendError, DataForSeoApi, DataForSeoClient};
pub use config::Config;
pub use params::{FetchParams, SearchParams};
pub use store::ResultStore;
pub use tools::{FetchTool, OperationTool, SearchTool, ToolError};

// Re-export EmbeddableMcp trait for in-process usage
pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
