//! Mock agent runtime for testing
//!
//! Provides deterministic, configurable responses without network access,
//! and records every request it receives.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::{stream, StreamExt};
use parking_lot::Mutex;

use super::error::{InvocationError, InvocationResult};
use super::traits::AgentRuntime;
use super::types::{InvocationRequest, ResponseBody, RuntimeEvent};

/// Mock response mode
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Answer with the prompt as one buffered payload
    Echo,
    /// Answer with a fixed buffered payload
    Complete(String),
    /// Answer with a sequence of events
    Events(Vec<RuntimeEvent>),
    /// Fail the remote call before any response is produced
    Fail(String),
    /// Deliver `events`, then fail the stream
    FailAfter {
        events: Vec<RuntimeEvent>,
        message: String,
    },
}

impl Default for MockMode {
    fn default() -> Self {
        MockMode::Echo
    }
}

/// Mock agent runtime
#[derive(Debug, Default)]
pub struct MockRuntime {
    mode: MockMode,
    /// Delay before each event after the first (0 = no delay)
    event_delay_ms: u64,
    requests: Mutex<Vec<InvocationRequest>>,
}

impl MockRuntime {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            event_delay_ms: 0,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Echo the prompt back
    pub fn echo() -> Self {
        Self::new(MockMode::Echo)
    }

    /// Return a fixed buffered response
    pub fn complete(text: impl Into<String>) -> Self {
        Self::new(MockMode::Complete(text.into()))
    }

    /// Return the fragments as raw byte events
    pub fn raw_bytes<I, B>(fragments: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        Self::new(MockMode::Events(
            fragments.into_iter().map(|b| RuntimeEvent::bytes(b)).collect(),
        ))
    }

    /// Return the fragments as structured chunk events
    pub fn chunks<I, B>(fragments: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        Self::new(MockMode::Events(
            fragments.into_iter().map(|b| RuntimeEvent::chunk(b)).collect(),
        ))
    }

    /// Return an arbitrary event sequence
    pub fn events(events: Vec<RuntimeEvent>) -> Self {
        Self::new(MockMode::Events(events))
    }

    /// Fail every call with a remote error
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockMode::Fail(message.into()))
    }

    /// Deliver `events`, then fail mid-stream
    pub fn failing_after(events: Vec<RuntimeEvent>, message: impl Into<String>) -> Self {
        Self::new(MockMode::FailAfter {
            events,
            message: message.into(),
        })
    }

    /// Set the delay between events
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.event_delay_ms = delay_ms;
        self
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<InvocationRequest> {
        self.requests.lock().clone()
    }

    /// Number of invocations received
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    fn event_body(&self, events: Vec<RuntimeEvent>, failure: Option<String>) -> ResponseBody {
        let delay_ms = self.event_delay_ms;
        let items = events
            .into_iter()
            .map(Ok)
            .chain(failure.map(|message| Err(InvocationError::stream(message))));

        let stream = stream::iter(items.enumerate()).then(move |(i, item)| async move {
            if i > 0 && delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
            item
        });

        ResponseBody::Events(Box::pin(stream))
    }
}

#[async_trait]
impl AgentRuntime for MockRuntime {
    fn name(&self) -> &str {
        "mock"
    }

    async fn invoke_agent_runtime(
        &self,
        request: &InvocationRequest,
    ) -> InvocationResult<ResponseBody> {
        self.requests.lock().push(request.clone());

        match &self.mode {
            MockMode::Echo => Ok(ResponseBody::complete(request.prompt.clone())),
            MockMode::Complete(text) => Ok(ResponseBody::complete(text.clone())),
            MockMode::Events(events) => Ok(self.event_body(events.clone(), None)),
            MockMode::Fail(message) => Err(InvocationError::remote(message.clone())),
            MockMode::FailAfter { events, message } => {
                Ok(self.event_body(events.clone(), Some(message.clone())))
            }
        }
    }
}
