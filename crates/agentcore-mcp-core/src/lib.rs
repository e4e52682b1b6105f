//! AgentCore MCP Core
//!
//! MCP tool server that forwards DICOM Store Service questions to a
//! Bedrock AgentCore agent runtime. The binary crate only wires these
//! pieces together and serves them over stdio.
//!
//! ```rust,ignore
//! use agentcore_mcp_core::{AgentClient, AgentCoreRuntime, Config, TracingLogger};
//! use std::sync::Arc;
//!
//! let config = Config::from_env()?;
//! let logger: Arc<dyn Logger> = Arc::new(TracingLogger::default());
//!
//! let runtime = AgentCoreRuntime::connect(config.region(), logger.clone()).await;
//! let client = AgentClient::from_config(Arc::new(runtime), &config, logger);
//!
//! let answer = client.invoke("Focus on design and architecture: How does X work?", None).await?;
//! ```

pub mod config;
pub mod logging;
pub mod mcp;
pub mod runtime;
pub mod tools;

pub use config::{Config, ConfigError, ConfigResult, EnvSettings, LogLevel, MemorySettings, SettingsSource};

pub use logging::{init_tracing, Logger, MemoryLogger, NoOpLogger, SharedLogger, TracingLogger};

pub use runtime::{
    AgentClient, AgentCoreRuntime, AgentRuntime, InvocationError, InvocationRequest,
    InvocationResult, MockRuntime, ResponseBody, RuntimeEvent, TextStream,
};

pub use tools::{QueryArguments, ToolDescriptor, ToolDispatcher, ToolName, ToolResponse, ToolResponseKind};

pub use mcp::{serve_stdio, AgentCoreMcpServer, McpError, McpResult, SERVER_NAME};
