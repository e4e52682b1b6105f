//! Agent runtime trait definition

use async_trait::async_trait;

use super::error::InvocationResult;
use super::types::{InvocationRequest, ResponseBody};

/// Transport to a managed agent runtime
///
/// Implementations:
/// - `AgentCoreRuntime`: Amazon Bedrock AgentCore through the AWS SDK
/// - `MockRuntime`: scripted responses for testing
///
/// Implementations issue exactly one remote call per `invoke_agent_runtime`
/// and never retry. They must be safe to share across concurrent calls.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Short name of the runtime (e.g. "bedrock-agentcore")
    fn name(&self) -> &str;

    /// Issue one invocation and return the raw response body
    async fn invoke_agent_runtime(&self, request: &InvocationRequest)
        -> InvocationResult<ResponseBody>;
}
