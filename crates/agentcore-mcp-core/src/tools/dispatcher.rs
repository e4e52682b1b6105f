//! Tool dispatcher
//!
//! Turns a tool call into one agent invocation and always answers with a
//! `ToolResponse`; no failure escapes `call_tool`.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::logging::SharedLogger;
use crate::runtime::{AgentClient, InvocationError};

use super::catalog::{catalog, enhanced_prompt, ToolDescriptor};
use super::types::{QueryArguments, ToolResponse};

/// Characters of the prompt included in the invocation log line
const PROMPT_LOG_CHARS: usize = 100;

pub struct ToolDispatcher {
    client: Arc<AgentClient>,
    logger: SharedLogger,
}

impl ToolDispatcher {
    pub fn new(client: Arc<AgentClient>, logger: SharedLogger) -> Self {
        Self { client, logger }
    }

    /// The advertised tools; identical on every call
    pub fn list_tools(&self) -> &'static [ToolDescriptor] {
        catalog()
    }

    /// Handle one tool call
    pub async fn call_tool(&self, name: &str, arguments: Option<Map<String, Value>>) -> ToolResponse {
        self.logger.info(&format!("Tool called: {}", name));

        let arguments = match QueryArguments::from_arguments(arguments) {
            Ok(arguments) => arguments,
            Err(e) => {
                self.logger.warn(&format!("Rejected arguments for {}: {}", name, e));
                return ToolResponse::error(format!("Invalid arguments: {}", e));
            }
        };

        let Some(query) = arguments.query() else {
            return ToolResponse::error("Query parameter is required");
        };

        let prompt = enhanced_prompt(name, query);
        self.logger.info(&format!(
            "Invoking AgentCore with query: {}...",
            prompt.chars().take(PROMPT_LOG_CHARS).collect::<String>()
        ));

        // Run the invocation on its own task so the transport keeps being served.
        let client = self.client.clone();
        let session_id = arguments.session_id().map(str::to_string);
        let worker = tokio::spawn(async move { client.invoke(&prompt, session_id.as_deref()).await });

        let result = match worker.await {
            Ok(result) => result,
            Err(e) => Err(InvocationError::Worker(e.to_string())),
        };

        match result {
            Ok(text) => {
                self.logger.info(&format!(
                    "AgentCore response received ({} chars)",
                    text.chars().count()
                ));
                ToolResponse::success(text)
            }
            Err(e) => {
                let message = format!("Error invoking agent: {}", e);
                self.logger.error(&message);
                ToolResponse::error(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use crate::logging::{MemoryLogger, NoOpLogger};
    use crate::runtime::{
        AgentRuntime, InvocationRequest, InvocationResult, MockRuntime, ResponseBody,
    };
    use crate::tools::ToolResponseKind;
    use async_trait::async_trait;
    use serde_json::json;

    /// Runtime whose invocation task never completes normally
    struct PanickingRuntime;

    #[async_trait]
    impl AgentRuntime for PanickingRuntime {
        fn name(&self) -> &str {
            "panicking"
        }

        async fn invoke_agent_runtime(
            &self,
            _request: &InvocationRequest,
        ) -> InvocationResult<ResponseBody> {
            panic!("runtime blew up")
        }
    }

    fn dispatcher(runtime: Arc<MockRuntime>, logger: SharedLogger) -> ToolDispatcher {
        let client = AgentClient::new(runtime, "arn:test", logger.clone());
        ToolDispatcher::new(Arc::new(client), logger)
    }

    fn args(value: Value) -> Option<Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_query_design_scenario() {
        let runtime = Arc::new(MockRuntime::complete("X works by Y"));
        let dispatcher = dispatcher(runtime.clone(), Arc::new(NoOpLogger::new()));

        let response = dispatcher
            .call_tool("query_design", args(json!({"query": "How does X work?"})))
            .await;

        assert_eq!(response, ToolResponse::success("X works by Y"));
        let requests = runtime.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].prompt,
            "Focus on design and architecture: How does X work?"
        );
    }

    #[tokio::test]
    async fn test_each_call_is_one_invocation_with_prefix() {
        let runtime = Arc::new(MockRuntime::echo());
        let dispatcher = dispatcher(runtime.clone(), Arc::new(NoOpLogger::new()));

        let cases = [
            ("query_requirements", "a", "Focus on requirements: a"),
            ("query_design", "b c", "Focus on design and architecture: b c"),
            ("query_requirements", "☃ unicode", "Focus on requirements: ☃ unicode"),
            ("unlisted_tool", "raw", "raw"),
        ];
        for (i, (name, query, expected)) in cases.iter().enumerate() {
            let response = dispatcher.call_tool(name, args(json!({"query": query}))).await;
            assert_eq!(response.kind, ToolResponseKind::Success);
            assert_eq!(response.text, *expected);
            assert_eq!(runtime.call_count(), i + 1);
        }
    }

    #[tokio::test]
    async fn test_session_id_is_forwarded() {
        let runtime = Arc::new(MockRuntime::echo());
        let dispatcher = dispatcher(runtime.clone(), Arc::new(NoOpLogger::new()));

        dispatcher
            .call_tool(
                "query_requirements",
                args(json!({"query": "q", "session_id": "session-0123456789"})),
            )
            .await;

        assert_eq!(runtime.requests()[0].session_id, "session-0123456789");
    }

    #[tokio::test]
    async fn test_missing_query_never_invokes() {
        let runtime = Arc::new(MockRuntime::echo());
        let dispatcher = dispatcher(runtime.clone(), Arc::new(NoOpLogger::new()));

        for arguments in [None, args(json!({})), args(json!({"query": ""}))] {
            let response = dispatcher.call_tool("query_design", arguments).await;
            assert!(response.is_error());
            assert_eq!(response.text, "Error: Query parameter is required");
        }
        assert_eq!(runtime.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_arguments_never_invoke() {
        let runtime = Arc::new(MockRuntime::echo());
        let dispatcher = dispatcher(runtime.clone(), Arc::new(NoOpLogger::new()));

        let response = dispatcher
            .call_tool("query_design", args(json!({"query": "q", "top_k": 3})))
            .await;

        assert!(response.is_error());
        assert!(response.text.starts_with("Error: Invalid arguments:"));
        assert_eq!(runtime.call_count(), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_becomes_error_response() {
        let logger = Arc::new(MemoryLogger::new());
        let runtime = Arc::new(MockRuntime::failing("access denied"));
        let dispatcher = dispatcher(runtime, logger.clone());

        let response = dispatcher
            .call_tool("query_requirements", args(json!({"query": "q"})))
            .await;

        assert_eq!(
            response,
            ToolResponse {
                kind: ToolResponseKind::Error,
                text: "Error: Error invoking agent: Failed to invoke agent: access denied"
                    .to_string(),
            }
        );
        assert!(logger.contains(LogLevel::Error, "Error invoking agent"));
    }

    #[tokio::test]
    async fn test_worker_panic_becomes_error_response() {
        let logger = Arc::new(MemoryLogger::new());
        let client = AgentClient::new(Arc::new(PanickingRuntime), "arn:test", logger.clone());
        let dispatcher = ToolDispatcher::new(Arc::new(client), logger.clone());

        let response = dispatcher
            .call_tool("query_design", args(json!({"query": "q"})))
            .await;

        assert_eq!(response.kind, ToolResponseKind::Error);
        assert!(response
            .text
            .starts_with("Error: Error invoking agent: Invocation worker failed"));
        assert!(logger.contains(LogLevel::Error, "Invocation worker failed"));
    }

    #[tokio::test]
    async fn test_mid_stream_failure_becomes_error_response() {
        let runtime = Arc::new(MockRuntime::failing_after(
            vec![crate::runtime::RuntimeEvent::bytes("partial")],
            "connection reset",
        ));
        let dispatcher = dispatcher(runtime, Arc::new(NoOpLogger::new()));

        let response = dispatcher
            .call_tool("query_design", args(json!({"query": "q"})))
            .await;

        assert!(response.is_error());
        assert!(response.text.starts_with("Error: "));
        assert!(response.text.contains("connection reset"));
    }

    #[tokio::test]
    async fn test_prompt_log_is_truncated() {
        let logger = Arc::new(MemoryLogger::new());
        let runtime = Arc::new(MockRuntime::echo());
        let dispatcher = dispatcher(runtime, logger.clone());
        let query = "é".repeat(300);

        dispatcher
            .call_tool("query_requirements", args(json!({"query": query})))
            .await;

        let line = logger
            .messages_at(LogLevel::Info)
            .into_iter()
            .find(|m| m.starts_with("Invoking AgentCore with query: "))
            .unwrap();
        let logged = line
            .trim_start_matches("Invoking AgentCore with query: ")
            .trim_end_matches("...");
        assert_eq!(logged.chars().count(), PROMPT_LOG_CHARS);
        assert!(logger.contains(LogLevel::Info, "Tool called: query_requirements"));
    }

    #[test]
    fn test_list_tools_is_idempotent() {
        let dispatcher = dispatcher(Arc::new(MockRuntime::echo()), Arc::new(NoOpLogger::new()));
        let first = dispatcher.list_tools();
        let second = dispatcher.list_tools();

        assert_eq!(first, second);
        let names: Vec<_> = first.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["query_requirements", "query_design"]);
    }
}
