//! Amazon Bedrock AgentCore runtime
//!
//! Uses the AWS SDK `InvokeAgentRuntime` operation. Credentials come from the
//! standard AWS provider chain (environment, profile, instance role, ...).

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockagentcore::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockagentcore::primitives::{Blob, ByteStream};
use aws_sdk_bedrockagentcore::Client;
use futures::stream;

use crate::logging::SharedLogger;

use super::error::{InvocationError, InvocationResult};
use super::traits::AgentRuntime;
use super::types::{EventStream, InvocationRequest, ResponseBody, RuntimeEvent};

/// Agent runtime backed by the Bedrock AgentCore data plane
///
/// Cheap to clone; the underlying SDK client is shared and safe to use from
/// concurrent tasks.
#[derive(Clone)]
pub struct AgentCoreRuntime {
    client: Client,
    logger: SharedLogger,
}

impl AgentCoreRuntime {
    /// Build a client for `region`
    ///
    /// SDK-level retries are turned off: every failure is reported to the
    /// caller as-is.
    pub async fn connect(region: &str, logger: SharedLogger) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        logger.info(&format!("AgentCore client initialized (region: {})", region));

        Self::from_client(Client::new(&sdk_config), logger)
    }

    /// Wrap an existing SDK client
    pub fn from_client(client: Client, logger: SharedLogger) -> Self {
        Self { client, logger }
    }
}

impl std::fmt::Debug for AgentCoreRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentCoreRuntime").finish_non_exhaustive()
    }
}

#[async_trait]
impl AgentRuntime for AgentCoreRuntime {
    fn name(&self) -> &str {
        "bedrock-agentcore"
    }

    async fn invoke_agent_runtime(
        &self,
        request: &InvocationRequest,
    ) -> InvocationResult<ResponseBody> {
        let payload = request.payload()?;
        self.logger.debug(&format!(
            "Sending InvokeAgentRuntime ({} payload bytes)",
            payload.len()
        ));

        let output = self
            .client
            .invoke_agent_runtime()
            .agent_runtime_arn(&request.runtime_arn)
            .runtime_session_id(&request.session_id)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|e| InvocationError::Remote(describe_sdk_error(&e)))?;

        into_response_body(output.response).await
    }
}

/// Classify the SDK body
///
/// A body with a known length is read in full; a chunked body is handed on
/// as a stream of raw byte frames.
async fn into_response_body(body: ByteStream) -> InvocationResult<ResponseBody> {
    let (lower, upper) = body.size_hint();
    if upper == Some(lower) {
        let data = body
            .collect()
            .await
            .map_err(|e| InvocationError::stream(DisplayErrorContext(&e).to_string()))?
            .into_bytes();
        return Ok(ResponseBody::Complete(data));
    }
    Ok(ResponseBody::Events(byte_frames(body)))
}

fn byte_frames(body: ByteStream) -> EventStream {
    Box::pin(stream::unfold(body, |mut body| async move {
        let frame = body.next().await?;
        let event = frame
            .map(RuntimeEvent::Bytes)
            .map_err(|e| InvocationError::stream(DisplayErrorContext(&e).to_string()));
        Some((event, body))
    }))
}

/// Render an SDK failure as `"<message> (<code>)"` for service errors, or
/// the full error chain otherwise
fn describe_sdk_error<E, R>(err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    if let Some(service_err) = err.as_service_error() {
        let message = service_err.message().unwrap_or("no message");
        return match service_err.code() {
            Some(code) => format!("{} ({})", message, code),
            None => message.to_string(),
        };
    }
    DisplayErrorContext(err).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sized_body_is_complete() {
        let body = into_response_body(ByteStream::from_static(b"X works by Y"))
            .await
            .unwrap();

        match body {
            ResponseBody::Complete(data) => assert_eq!(&data[..], b"X works by Y"),
            other => panic!("expected a complete body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_byte_frames_yield_raw_events() {
        use futures::StreamExt;

        let events: Vec<_> = byte_frames(ByteStream::from_static(b"frame")).collect().await;
        let text: Vec<u8> = events
            .into_iter()
            .flat_map(|e| e.unwrap().into_bytes().unwrap().to_vec())
            .collect();
        assert_eq!(text, b"frame");
    }
}
