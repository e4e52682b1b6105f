//! MCP server handler using the official rmcp SDK

use std::sync::Arc;

use rmcp::{
    model::{
        CallToolRequestParams, CallToolResult, Content, ListToolsResult, PaginatedRequestParams,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData, RoleServer, ServerHandler, ServiceExt,
};
use thiserror::Error;

use crate::logging::SharedLogger;
use crate::tools::{ToolDescriptor, ToolDispatcher};

/// Name announced to MCP clients during initialization
pub const SERVER_NAME: &str = "dss-query-retrieve-agent";

/// MCP server errors
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Transport closed abnormally: {0}")]
    Transport(String),
}

pub type McpResult<T> = Result<T, McpError>;

/// rmcp handler backed by a `ToolDispatcher`
#[derive(Clone)]
pub struct AgentCoreMcpServer {
    dispatcher: Arc<ToolDispatcher>,
    logger: SharedLogger,
}

impl AgentCoreMcpServer {
    pub fn new(dispatcher: Arc<ToolDispatcher>, logger: SharedLogger) -> Self {
        Self { dispatcher, logger }
    }
}

fn to_mcp_tool(descriptor: &ToolDescriptor) -> Tool {
    Tool::new(
        descriptor.name.as_str(),
        descriptor.description,
        Arc::new(descriptor.input_schema.clone()),
    )
}

impl ServerHandler for AgentCoreMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(
            "Answers questions about the DICOM Store Service: use query_requirements for \
             requirements and query_design for design and architecture."
                .to_string(),
        );
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools: Vec<Tool> = self.dispatcher.list_tools().iter().map(to_mcp_tool).collect();
        self.logger.debug(&format!("Listed {} tools", tools.len()));
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let response = self
            .dispatcher
            .call_tool(request.name.as_ref(), request.arguments)
            .await;

        let is_error = response.is_error();
        let content = vec![Content::text(response.text)];
        if is_error {
            Ok(CallToolResult::error(content))
        } else {
            Ok(CallToolResult::success(content))
        }
    }
}

/// Serve `server` over stdin/stdout until the client disconnects
pub async fn serve_stdio(server: AgentCoreMcpServer) -> McpResult<()> {
    let logger = server.logger.clone();

    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| McpError::InitializationFailed(e.to_string()))?;
    logger.info("MCP session initialized");

    let reason = running
        .waiting()
        .await
        .map_err(|e| McpError::Transport(e.to_string()))?;
    logger.info(&format!("MCP session ended: {:?}", reason));
    Ok(())
}
