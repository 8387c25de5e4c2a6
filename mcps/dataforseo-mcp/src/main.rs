//! DataForSEO MCP Server
//!
//! Serves the `search` and `fetch` tools over stdio.
//!
//! # Configuration
//! Set `DATAFORSEO_USERNAME` / `DATAFORSEO_PASSWORD` or configure in `~/.binks/dataforseo.toml`

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use std::path::PathBuf;

use dataforseo_mcp::{Config, DataForSeoMcpServer};

#[derive(Parser, Debug)]
#[command(name = "dataforseo-mcp", version, about = "DataForSEO search/fetch MCP server")]
struct Args {
    /// Path to a TOML config file
    #[arg(long, env = "DATAFORSEO_CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    mcp_common::init_tracing("dataforseo_mcp")?;

    tracing::info!("Starting DataForSEO MCP Server");

    let config = Config::load(args.config.as_deref())?;
    tracing::info!("DataForSEO API: {}", config.dataforseo.base_url);

    let server = DataForSeoMcpServer::from_config(&config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
