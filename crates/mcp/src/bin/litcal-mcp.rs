// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use litcal_mcp::config::ServerConfig;
use litcal_mcp::server::McpServer;
use litcal_mcp::tools::{calendar_registry, ToolContext};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "litcal-mcp", version)]
#[command(about = "Liturgical Calendar MCP server over stdio", long_about = None)]
struct Args {
    /// Path to configuration file; a missing file means defaults
    #[arg(short, long, default_value = "litcal.toml")]
    config: PathBuf,

    /// Base URL of the Liturgical Calendar API
    #[arg(long)]
    api_base_url: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long, allow_negative_numbers = true)]
    timeout_secs: Option<i64>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    // stdout carries protocol frames only
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json);

    tracing::info!("Litcal MCP Server starting...");

    let config = ServerConfig::load(&args.config)?
        .with_env()
        .with_overrides(args.api_base_url, args.timeout_secs);
    tracing::info!(
        api_base_url = %config.api_base_url,
        timeout_secs = config.timeout_secs,
        "Configuration loaded"
    );

    let registry = calendar_registry(ToolContext::new(config.client()?));
    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    if let Err(e) = server.start().await {
        tracing::error!("MCP server stopped: {:#}", e);
        return Err(e);
    }

    Ok(())
}
