//! MCP Server implementation for DataForSEO search/fetch
//!
//! This module wires the `search` and `fetch` tools into an rmcp tool router.
//! Both tools share one [`ResultStore`], created by the caller and passed in.

use anyhow::Result;
use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;
use std::sync::Arc;

use crate::client::{DataForSeoApi, DataForSeoClient};
use crate::config::Config;
use crate::params::{FetchParams, SearchParams};
use crate::store::ResultStore;
use crate::tools::{invoke, FetchTool, OperationTool, SearchTool};

/// The main DataForSEO MCP Server
#[derive(Clone)]
pub struct DataForSeoMcpServer {
    search: Arc<SearchTool>,
    fetch: Arc<FetchTool>,
    store: ResultStore,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl DataForSeoMcpServer {
    pub fn new(backend: Arc<dyn DataForSeoApi>, store: ResultStore) -> Self {
        tracing::info!("Using {} backend", backend.name());

        Self {
            search: Arc::new(SearchTool::new(backend, store.clone())),
            fetch: Arc::new(FetchTool::new(store.clone())),
            store,
            tool_router: Self::tool_router(),
        }
    }

    /// Build the HTTP client from `config` and start with an empty store
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = DataForSeoClient::new(config.dataforseo.clone())?;
        Ok(Self::new(Arc::new(client), ResultStore::new()))
    }

    /// The store shared by both tools
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    #[tool(
        description = "Search DataForSEO. Use `source=serp` for live search engine results or `source=labs` for keyword ideas from DataForSEO Labs. Returns result stubs whose ids can be passed to `fetch`."
    )]
    async fn search(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        invoke(self.search.as_ref(), params).await
    }

    #[tool(
        description = "Retrieve detailed SERP information for a result returned by the search tool."
    )]
    async fn fetch(
        &self,
        Parameters(params): Parameters<FetchParams>,
    ) -> Result<CallToolResult, McpError> {
        invoke(self.fetch.as_ref(), params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for DataForSeoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "DataForSEO MCP Server - `search` queries live SERP results (google, bing, \
                 yahoo) or DataForSEO Labs keyword ideas and returns lightweight stubs. \
                 Pass a stub's id to `fetch` for the full record."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for DataForSeoMcpServer {
    fn server_name(&self) -> &str {
        "dataforseo"
    }

    fn server_description(&self) -> Option<&str> {
        Some("DataForSEO search/fetch MCP Server - SERP organic results and Labs keyword ideas.")
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        if name == self.search.name() {
            let params: SearchParams = serde_json::from_value(params)?;
            self.search(Parameters(params)).await.map_err(Into::into)
        } else if name == self.fetch.name() {
            let params: FetchParams = serde_json::from_value(params)?;
            self.fetch(Parameters(params)).await.map_err(Into::into)
        } else {
            Err(EmbeddableError::ToolNotFound(name.to_string()))
        }
    }
}
