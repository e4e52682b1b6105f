//! Agent runtime invocation
//!
//! - `AgentRuntime`: transport trait (one remote call per invocation)
//! - `AgentCoreRuntime`: Bedrock AgentCore through the AWS SDK
//! - `MockRuntime`: scripted responses for testing
//! - `AgentClient`: session handling and response decoding on top of a runtime

mod agentcore;
mod client;
mod decode;
mod error;
mod mock;
mod traits;
mod types;

pub use agentcore::AgentCoreRuntime;
pub use client::{new_session_id, AgentClient};
pub use decode::{text_fragments, Utf8Decoder};
pub use error::{InvocationError, InvocationResult};
pub use mock::{MockMode, MockRuntime};
pub use traits::AgentRuntime;
pub use types::{EventStream, InvocationRequest, ResponseBody, RuntimeEvent, TextStream};
