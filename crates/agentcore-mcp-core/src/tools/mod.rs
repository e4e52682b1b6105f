//! Query tools
//!
//! The fixed two-tool catalog and the dispatcher that maps a tool call onto
//! one agent invocation.

mod catalog;
mod dispatcher;
mod types;

pub use catalog::{catalog, enhanced_prompt, ToolDescriptor, ToolName};
pub use dispatcher::ToolDispatcher;
pub use types::{QueryArguments, ToolResponse, ToolResponseKind};
