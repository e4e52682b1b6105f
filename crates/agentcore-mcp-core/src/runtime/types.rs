//! Request and response shapes exchanged with the agent runtime

use std::fmt;
use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;
use serde::Serialize;

use super::error::InvocationResult;

/// One invocation of the agent runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// ARN of the agent runtime to invoke
    pub runtime_arn: String,
    /// Runtime session identifier
    pub session_id: String,
    /// Prompt sent to the agent
    pub prompt: String,
}

#[derive(Serialize)]
struct Payload<'a> {
    prompt: &'a str,
}

impl InvocationRequest {
    pub fn new(
        runtime_arn: impl Into<String>,
        session_id: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            runtime_arn: runtime_arn.into(),
            session_id: session_id.into(),
            prompt: prompt.into(),
        }
    }

    /// JSON body sent to the runtime: `{"prompt": "..."}`
    pub fn payload(&self) -> InvocationResult<Vec<u8>> {
        Ok(serde_json::to_vec(&Payload {
            prompt: &self.prompt,
        })?)
    }
}

/// One event of a chunked runtime response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// Raw response bytes
    Bytes(Bytes),
    /// Structured record carrying its payload under the `chunk` field.
    /// A record without a payload decodes as empty text.
    Chunk { bytes: Option<Bytes> },
    /// Any other event shape, described for logging
    Unrecognized(String),
}

impl RuntimeEvent {
    pub fn bytes(data: impl Into<Bytes>) -> Self {
        Self::Bytes(data.into())
    }

    pub fn chunk(data: impl Into<Bytes>) -> Self {
        Self::Chunk {
            bytes: Some(data.into()),
        }
    }

    /// Extract the payload bytes, or hand back the description of an
    /// unrecognized event
    pub fn into_bytes(self) -> Result<Bytes, String> {
        match self {
            Self::Bytes(data) => Ok(data),
            Self::Chunk { bytes } => Ok(bytes.unwrap_or_default()),
            Self::Unrecognized(shape) => Err(shape),
        }
    }
}

/// Stream of runtime events in arrival order
pub type EventStream = Pin<Box<dyn Stream<Item = InvocationResult<RuntimeEvent>> + Send>>;

/// Lazy sequence of decoded text fragments
///
/// Finite and single-use: it is consumed by iteration and cannot be
/// restarted.
pub type TextStream = Pin<Box<dyn Stream<Item = InvocationResult<String>> + Send>>;

/// Body of a runtime response
///
/// The runtime hands back either one fully buffered payload or a sequence of
/// events, depending on how the agent answers. Both are normalized to text by
/// `AgentClient`.
pub enum ResponseBody {
    /// The whole payload at once
    Complete(Bytes),
    /// Payload delivered as a sequence of events
    Events(EventStream),
}

impl ResponseBody {
    pub fn complete(data: impl Into<Bytes>) -> Self {
        Self::Complete(data.into())
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete(data) => f.debug_tuple("Complete").field(&data.len()).finish(),
            Self::Events(_) => f.write_str("Events(..)"),
        }
    }
}
