//! dss-agentcore-mcp
//!
//! Stdio MCP server exposing the DSS query/retrieve agent as two tools.
//! stdout carries the MCP protocol; all logging goes to stderr.

use std::sync::Arc;

use agentcore_mcp_core::{
    init_tracing, serve_stdio, AgentClient, AgentCoreMcpServer, AgentCoreRuntime, Config,
    SharedLogger, ToolDispatcher, TracingLogger, SERVER_NAME,
};
use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("invalid configuration")?;
    init_tracing(config.log_level());

    let logger: SharedLogger = Arc::new(TracingLogger::new());
    logger.info(&format!("Starting MCP server {}", SERVER_NAME));
    logger.info(&format!("Agent Runtime ARN: {}", config.runtime_arn()));
    logger.info(&format!("AWS Region: {}", config.region()));

    let runtime = AgentCoreRuntime::connect(config.region(), logger.clone()).await;
    let client = AgentClient::from_config(Arc::new(runtime), &config, logger.clone());
    let dispatcher = ToolDispatcher::new(Arc::new(client), logger.clone());
    let server = AgentCoreMcpServer::new(Arc::new(dispatcher), logger.clone());

    serve_stdio(server).await.context("MCP server failed")?;

    logger.info("MCP server stopped");
    Ok(())
}
