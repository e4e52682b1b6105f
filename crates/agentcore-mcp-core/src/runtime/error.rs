//! Invocation error types

use thiserror::Error;

/// Errors that can occur while invoking the agent runtime
#[derive(Error, Debug)]
pub enum InvocationError {
    /// The remote call was rejected or could not be delivered
    /// (access denied, throttling, malformed runtime ARN, network failure)
    #[error("Failed to invoke agent: {0}")]
    Remote(String),

    /// Same as `Remote`, raised from the streaming entry point
    #[error("Failed to invoke agent with streaming: {0}")]
    RemoteStream(String),

    /// The request payload could not be encoded
    #[error("Failed to encode request payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Response bytes were not valid UTF-8
    #[error("Response is not valid UTF-8: {0}")]
    Decode(String),

    /// The response body failed while it was being read
    #[error("Response stream failed: {0}")]
    Stream(String),

    /// The worker task running the invocation did not complete
    #[error("Invocation worker failed: {0}")]
    Worker(String),
}

impl InvocationError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    pub fn stream(message: impl Into<String>) -> Self {
        Self::Stream(message.into())
    }

    /// Whether this is a failure reported by the remote call itself
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_) | Self::RemoteStream(_))
    }

    /// Re-label a remote failure for the streaming entry point
    pub(crate) fn into_streaming(self) -> Self {
        match self {
            Self::Remote(message) => Self::RemoteStream(message),
            other => other,
        }
    }
}

pub type InvocationResult<T> = Result<T, InvocationError>;
