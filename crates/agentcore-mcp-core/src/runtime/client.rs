//! Agent client
//!
//! Builds invocation requests, assigns session identifiers and turns the
//! runtime's response into text, either all at once (`invoke`) or as it
//! arrives (`invoke_stream`).

use std::sync::Arc;

use futures::{stream, StreamExt};
use uuid::Uuid;

use crate::config::Config;
use crate::logging::SharedLogger;

use super::decode::text_fragments;
use super::error::{InvocationError, InvocationResult};
use super::traits::AgentRuntime;
use super::types::{InvocationRequest, TextStream};

/// Client for one agent runtime
///
/// Holds no per-call state and is safe to share across concurrent calls.
/// Each call issues exactly one remote invocation; nothing is retried.
pub struct AgentClient {
    runtime: Arc<dyn AgentRuntime>,
    runtime_arn: String,
    logger: SharedLogger,
}

impl AgentClient {
    pub fn new(
        runtime: Arc<dyn AgentRuntime>,
        runtime_arn: impl Into<String>,
        logger: SharedLogger,
    ) -> Self {
        Self {
            runtime,
            runtime_arn: runtime_arn.into(),
            logger,
        }
    }

    /// Client for the runtime ARN named in `config`
    pub fn from_config(runtime: Arc<dyn AgentRuntime>, config: &Config, logger: SharedLogger) -> Self {
        Self::new(runtime, config.runtime_arn(), logger)
    }

    /// Invoke the agent and return the complete response text
    ///
    /// An absent or empty `session_id` gets a freshly generated one.
    pub async fn invoke(&self, prompt: &str, session_id: Option<&str>) -> InvocationResult<String> {
        let request = self.request(prompt, session_id);
        self.logger.info(&format!(
            "Invoking agent (session: {}...)",
            session_prefix(&request.session_id)
        ));

        let body = self
            .runtime
            .invoke_agent_runtime(&request)
            .await
            .map_err(|e| self.failed(e))?;

        let mut fragments = text_fragments(body, self.logger.clone());
        let mut text = String::new();
        while let Some(fragment) = fragments.next().await {
            text.push_str(&fragment.map_err(|e| self.failed(e))?);
        }

        self.logger.info(&format!(
            "Agent response received ({} chars)",
            text.chars().count()
        ));
        Ok(text)
    }

    /// Invoke the agent and yield the response text fragment by fragment
    ///
    /// Concatenating every fragment gives the same text `invoke` returns for
    /// the same response. A failure of the remote call itself is returned
    /// here; a failure while reading is yielded as the last item.
    pub async fn invoke_stream(
        &self,
        prompt: &str,
        session_id: Option<&str>,
    ) -> InvocationResult<TextStream> {
        let request = self.request(prompt, session_id);
        self.logger.info(&format!(
            "Invoking agent with streaming (session: {}...)",
            session_prefix(&request.session_id)
        ));

        let body = self
            .runtime
            .invoke_agent_runtime(&request)
            .await
            .map_err(|e| self.failed(e.into_streaming()))?;

        let logger = self.logger.clone();
        let fragments = text_fragments(body, logger.clone());

        Ok(Box::pin(stream::unfold(Some(fragments), move |state| {
            let logger = logger.clone();
            async move {
                let mut fragments = state?;
                match fragments.next().await {
                    Some(Ok(text)) => {
                        logger.debug(&format!("Streaming chunk: {} chars", text.chars().count()));
                        Some((Ok(text), Some(fragments)))
                    }
                    Some(Err(e)) => {
                        logger.error(&format!("Unexpected error during streaming: {}", e));
                        Some((Err(e), None))
                    }
                    None => {
                        logger.info("Streaming completed");
                        None
                    }
                }
            }
        })
        .fuse()))
    }

    fn request(&self, prompt: &str, session_id: Option<&str>) -> InvocationRequest {
        let session_id = match session_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => new_session_id(),
        };
        InvocationRequest::new(self.runtime_arn.clone(), session_id, prompt)
    }

    fn failed(&self, err: InvocationError) -> InvocationError {
        if err.is_remote() {
            self.logger.error(&format!("AgentCore invocation failed: {}", err));
        } else {
            self.logger.error(&format!("Unexpected error: {}", err));
        }
        err
    }
}

/// Fresh random session identifier
///
/// UUID v4 in hyphenated form (36 characters), long enough for the
/// runtime's minimum session id length.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

fn session_prefix(session_id: &str) -> String {
    session_id.chars().take(8).collect()
}
