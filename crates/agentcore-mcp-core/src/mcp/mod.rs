//! MCP server
//!
//! Exposes the tool dispatcher through the official rmcp SDK. The binary
//! serves it over stdio; tests drive it over an in-memory duplex pipe.

mod server;

pub use server::{serve_stdio, AgentCoreMcpServer, McpError, McpResult, SERVER_NAME};
